/// Application name, used for configuration directories.
pub const APP_NAME: &str = "modrules";

/// Current module table format version.
pub const TABLE_VERSION: u32 = 1;

/// File name of the module table inside the configuration directory.
pub const TABLE_FILENAME: &str = "modules.json";

/// Environment variable that overrides the module table location.
pub const TABLE_ENV_VAR: &str = "MODRULES_TABLE";

/// Length of the truncated fingerprint produced by [`crate::util::hash::Hashable`].
pub const OBJ_HASH_PREFIX_LEN: usize = 20;
