//! Exponential-smoothing scroll camera

use crate::consts::{CAMERA_SMOOTHING, PLAYER_X_POS};

/// Move `camera_x` a fixed fraction of the way toward keeping the player at
/// its screen anchor. Returns the new offset.
#[inline]
pub fn follow(camera_x: f32, player_x: f32) -> f32 {
    let target = player_x - PLAYER_X_POS;
    camera_x + (target - camera_x) * CAMERA_SMOOTHING
}

/// Convert a world x to camera-relative screen x
#[inline]
pub fn to_screen_x(world_x: f32, camera_x: f32) -> f32 {
    world_x - camera_x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_at_target_is_stable() {
        assert_eq!(follow(100.0, 100.0 + PLAYER_X_POS), 100.0);
    }

    #[test]
    fn test_camera_moves_fraction_of_gap() {
        let camera = follow(0.0, PLAYER_X_POS + 100.0);
        assert!((camera - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_camera_converges() {
        let mut camera = 0.0;
        for _ in 0..500 {
            camera = follow(camera, PLAYER_X_POS + 300.0);
        }
        assert!((camera - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_to_screen_x() {
        assert_eq!(to_screen_x(850.0, 800.0), 50.0);
    }
}
