use std::path::Path;
use tracing::debug;

/// Config path used when none is supplied
pub const DEFAULT_CONFIG_PATH: &str = "/etc/app/config.json";

/// Lifecycle holder shared by higher-level services
#[derive(Debug, Clone)]
pub struct BaseService {
    config_path: String,
    initialized: bool,
}

impl BaseService {
    /// Create an uninitialized service for the given path, or the default one
    pub fn new(config_path: Option<&str>) -> Self {
        let config_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH).to_string();
        debug!("Base service configured with path {}", config_path);
        Self {
            config_path,
            initialized: false,
        }
    }

    /// Reset to a fresh, uninitialized state
    pub fn init(&mut self, config_path: Option<&str>) {
        *self = Self::new(config_path);
    }

    pub fn config_path(&self) -> &Path {
        Path::new(&self.config_path)
    }

    pub fn is_ready(&self) -> bool {
        self.initialized
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}

impl Default for BaseService {
    fn default() -> Self {
        Self::new(None)
    }
}
