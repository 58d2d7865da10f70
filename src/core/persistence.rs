use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::models::User;

/// Load/save hooks the user service calls into.
///
/// `load` runs once during `initialize` when the data file exists; `save`
/// runs after every successful create, update and delete.
pub trait Persistence {
    fn load(&self, path: &Path) -> Result<Vec<User>, PersistenceError>;

    fn save(&self, path: &Path, users: &[User]) -> Result<(), PersistenceError>;
}

/// Placeholder persistence that only prepares the data directory.
///
/// Nothing is read or written; `save` makes sure the parent directory of the
/// data path exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryPersistence;

impl Persistence for DirectoryPersistence {
    fn load(&self, path: &Path) -> Result<Vec<User>, PersistenceError> {
        debug!("Skipping user data parse for {}", path.display());
        info!("No existing user data found, starting fresh");
        Ok(Vec::new())
    }

    fn save(&self, path: &Path, users: &[User]) -> Result<(), PersistenceError> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Ok(()),
        };

        if !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| PersistenceError::CreateDir(parent.to_path_buf(), e))?;
            debug!("Created data directory: {}", parent.display());
        }

        debug!("Save requested for {} users at {}", users.len(), path.display());
        Ok(())
    }
}
