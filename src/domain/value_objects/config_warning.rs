//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Produced while loading `mddbl.json` (unknown keys, migrated legacy keys,
/// duplicate names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Key path (e.g. `targets.0.rotaton`) or entity name
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    pub kind: ConfigWarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarningKind {
    /// Key not part of the schema; ignored
    UnknownKey,
    /// Key from an older file layout, converted on load
    LegacyKey { replacement: String },
    /// Name used by more than one entry; the first entry wins
    DuplicateName,
}
