use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the index storage directory.
pub const INDEXES_DIR_ENV: &str = "ARTIFACT_SCOUT_INDEXES_DIR";

/// Directory where index files are cached.
///
/// `ARTIFACT_SCOUT_INDEXES_DIR` takes precedence when set; otherwise the
/// platform config directory is used (e.g. `~/.config/artifact-scout/indexes`
/// on Linux). The directory itself is created lazily on the first write.
pub fn indexes_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(INDEXES_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let config = dirs::config_dir().context("could not determine the platform config directory")?;
    Ok(config.join("artifact-scout").join("indexes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        // Save original value
        let original = env::var(INDEXES_DIR_ENV).ok();

        // SAFETY: tests in this module are the only readers of this variable
        // and the original value is restored before returning.
        unsafe {
            env::set_var(INDEXES_DIR_ENV, "/tmp/scout-indexes");
        }

        let dir = indexes_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/scout-indexes"));

        unsafe {
            match original {
                Some(v) => env::set_var(INDEXES_DIR_ENV, v),
                None => env::remove_var(INDEXES_DIR_ENV),
            }
        }
    }
}
