use std::env;
use std::path::PathBuf;

use crate::constants::envvars;

/// Loads `./.env` and the file named by `GWCONF_ENV_FILE`, if any.
///
/// Runs before logging is set up, so the loaded files are returned for the
/// caller to report.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }
    if let Ok(env_file) = env::var(envvars::ENV_FILE) {
        if dotenv::from_path(&env_file).is_ok() {
            loaded.push(PathBuf::from(env_file));
        }
    }
    loaded
}
