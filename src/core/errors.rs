use thiserror::Error;

/// Errors raised while reading or writing the hero's save file.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Wrapper around IO errors (missing file, permissions, full disk).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON encoding and decoding errors.
    #[error("save data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The default save location depends on a home directory.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// The file parsed but describes an impossible hero.
    #[error("save data is invalid: {0}")]
    Invalid(String),
}

impl SaveError {
    /// True when the save file simply does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, SaveError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Refusals from the shop counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("Not enough gold! ({gold}/{cost})")]
    NotEnoughGold { cost: u32, gold: u32 },
}

/// Refusals at the dragon's cave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("You need a key to enter!")]
    MissingKey,
}
