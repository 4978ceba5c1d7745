use std::io::Write;
use std::path::Path;
use crate::config::{write_config, ShoewearConfig};
use crate::ui::Console;

/// Write a config file pinning the database path
pub fn run_init<W: Write, E: Write>(
    console: &mut Console<W, E>,
    config_path: &Path,
    database: &Path,
    force: bool,
) -> anyhow::Result<()> {
    let config = ShoewearConfig {
        database: Some(database.display().to_string()),
    };
    write_config(config_path, &config, force)?;

    let message = format!(
        "Wrote {} (database: {})",
        config_path.display(),
        database.display()
    );
    console.done("init", &message, &config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::commands::testing::{console, stdout};

    #[test]
    fn test_init_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shoewear.toml");
        let mut c = console();

        run_init(&mut c, &path, Path::new("inventory.db"), false).unwrap();
        let loaded = load_config(Some(path.as_path())).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("inventory.db"));
        assert!(stdout(&c).starts_with("Wrote "));

        assert!(run_init(&mut c, &path, Path::new("other.db"), false).is_err());
        run_init(&mut c, &path, Path::new("other.db"), true).unwrap();
        let loaded = load_config(Some(path.as_path())).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("other.db"));
    }
}
