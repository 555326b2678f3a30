//! `wave2bin init` — write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{Wave2binConfig, CONFIG_FILE};

/// Create `wave2bin.toml` in `dir`, refusing to overwrite an existing one.
pub fn run(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::write(&path, Wave2binConfig::template())
        .with_context(|| format!("writing {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();

        let (config, found) = Wave2binConfig::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(found, dir.path());
        assert_eq!(config.convert.output.as_deref(), Some("wavBin.txt"));
    }

    #[test]
    fn init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[convert]\n").unwrap();

        let result = run(dir.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap(),
            "[convert]\n"
        );
    }
}
