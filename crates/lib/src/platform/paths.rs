//! Application directories and module table discovery.

use std::path::PathBuf;

use crate::consts::{APP_NAME, TABLE_ENV_VAR, TABLE_FILENAME};

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> PathBuf {
  let userprofile = std::env::var("USERPROFILE").unwrap_or_default();
  PathBuf::from(userprofile)
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> PathBuf {
  let home = std::env::var("HOME").unwrap_or_default();
  PathBuf::from(home)
}

/// Returns the directory for configuration files for the application
#[cfg(windows)]
pub fn config_dir() -> PathBuf {
  std::env::var("APPDATA")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join("AppData").join("Roaming"))
    .join(APP_NAME)
}

/// Returns the directory for configuration files for the application
#[cfg(not(windows))]
pub fn config_dir() -> PathBuf {
  let config_home = std::env::var("XDG_CONFIG_HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join(".config"));
  config_home.join(APP_NAME)
}

/// Default location of the user's module table.
pub fn default_table_path() -> PathBuf {
  config_dir().join(TABLE_FILENAME)
}

/// Where the module table should be read from, if anywhere.
///
/// `MODRULES_TABLE` wins over the configuration directory. The configuration
/// directory is only used when the file actually exists; `None` means the
/// built-in table applies.
pub fn table_path() -> Option<PathBuf> {
  match std::env::var(TABLE_ENV_VAR) {
    Ok(path) if !path.is_empty() => return Some(PathBuf::from(path)),
    _ => {}
  }

  let default = default_table_path();
  default.is_file().then_some(default)
}

#[cfg(test)]
#[cfg(not(windows))]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn xdg_config_home_takes_precedence() {
    temp_env::with_vars(
      [
        ("XDG_CONFIG_HOME", Some("/custom/config")),
        ("HOME", Some("/home/user")),
      ],
      || {
        assert_eq!(config_dir(), PathBuf::from("/custom/config").join(APP_NAME));
      },
    );
  }

  #[test]
  #[serial]
  fn xdg_fallback_to_home_directory() {
    temp_env::with_vars(
      [("XDG_CONFIG_HOME", None::<&str>), ("HOME", Some("/home/user"))],
      || {
        assert_eq!(config_dir(), PathBuf::from("/home/user/.config").join(APP_NAME));
        assert_eq!(
          default_table_path(),
          PathBuf::from("/home/user/.config/modrules/modules.json")
        );
      },
    );
  }

  #[test]
  #[serial]
  fn env_var_overrides_table_location() {
    temp_env::with_vars([(TABLE_ENV_VAR, Some("/tmp/elsewhere.json"))], || {
      assert_eq!(table_path(), Some(PathBuf::from("/tmp/elsewhere.json")));
    });
  }

  #[test]
  #[serial]
  fn missing_default_table_means_builtin() {
    let temp = tempfile::TempDir::new().unwrap();
    temp_env::with_vars(
      [
        (TABLE_ENV_VAR, None::<&str>),
        ("XDG_CONFIG_HOME", temp.path().to_str()),
      ],
      || {
        assert_eq!(table_path(), None);
      },
    );
  }

  #[test]
  #[serial]
  fn existing_default_table_is_found() {
    let temp = tempfile::TempDir::new().unwrap();
    let dir = temp.path().join(APP_NAME);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(TABLE_FILENAME), "{}").unwrap();

    temp_env::with_vars(
      [
        (TABLE_ENV_VAR, None::<&str>),
        ("XDG_CONFIG_HOME", temp.path().to_str()),
      ],
      || {
        assert_eq!(table_path(), Some(dir.join(TABLE_FILENAME)));
      },
    );
  }
}
