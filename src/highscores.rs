//! All-time high score
//!
//! A single integer stored under a fixed key. It is read once at startup
//! (missing or corrupt means "no high score") and written whenever a
//! finished run beats it.

/// Storage key (LocalStorage key on web, file name on native)
pub const STORAGE_KEY: &str = "capybaraHighScore";

/// Where the high score lives. Implementations never fail loudly: read
/// problems surface as `None`, write problems are logged.
pub trait HighScoreStore {
    /// Raw stored value, if any
    fn read(&mut self) -> Option<String>;
    fn write(&mut self, value: &str);
}

/// Parse a stored value; anything that isn't a non-negative integer is ignored
pub fn parse_stored(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(score) => Some(score),
        Err(e) => {
            log::warn!("Ignoring corrupt high score {:?}: {}", raw, e);
            None
        }
    }
}

/// High score tracker backed by a store
pub struct HighScore {
    best: u64,
    store: Box<dyn HighScoreStore>,
}

impl std::fmt::Debug for HighScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighScore").field("best", &self.best).finish()
    }
}

impl HighScore {
    /// Read the stored value once
    pub fn load(mut store: Box<dyn HighScoreStore>) -> Self {
        let best = store.read().as_deref().and_then(parse_stored).unwrap_or(0);
        if best > 0 {
            log::info!("Loaded high score {}", best);
        } else {
            log::info!("No high score found, starting fresh");
        }
        Self { best, store }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a finished run's score. Persists and returns true only if it
    /// beats the previous best.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.store.write(&score.to_string());
        log::info!("New high score {}", score);
        true
    }
}

/// In-memory store (tests, headless runs without persistence)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let store = Self::new();
        *store.value.borrow_mut() = Some(value.to_string());
        store
    }

    /// Current stored value (shared between clones)
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl HighScoreStore for MemoryStore {
    fn read(&mut self) -> Option<String> {
        self.value()
    }

    fn write(&mut self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }
}

/// Plain-text file store (native)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/capy-run/capybaraHighScore`, falling back to the working directory
    pub fn default_path() -> std::path::PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("capy-run"))
            .unwrap_or_default()
            .join(STORAGE_KEY)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for FileStore {
    fn read(&mut self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read high score {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn write(&mut self, value: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create {:?}: {}", parent, e);
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, value) {
            log::warn!("Failed to write high score {:?}: {}", self.path, e);
        }
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn read(&mut self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn write(&mut self, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(STORAGE_KEY, value).is_err() {
                log::warn!("Failed to write high score to LocalStorage");
            }
        }
    }
}
