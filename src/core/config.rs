use std::path::Path;
use tracing::info;

use crate::error::UserServiceError;
use crate::models::Config;

/// Load configuration from project directory with CLI overrides
pub fn load_config(
    project_root: &Path,
    config_path: Option<String>,
    max_users: Option<usize>,
) -> Result<Config, UserServiceError> {
    let config = Config::load_from_dir(project_root)?;
    let config = config.with_overrides(config_path, max_users);

    info!(
        "Configuration loaded: config_path={}, max_users={}",
        config.storage.config_path, config.limits.max_users
    );

    Ok(config)
}
