use crate::strategy::STRATEGY_VARIANTS;

/// The main error enum for this crate.
///
/// Only the fatal failures surface here; a missing component file and the
/// strategy-local soft failures (script not found, missing git URL) are
/// reported through [`logging`](crate::logging) instead of being raised.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `vendor_types` entry named a strategy outside the closed set.
    #[error("unknown vendor strategy '{value}': expected one of: {known}", known = STRATEGY_VARIANTS.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    InvalidStrategy { value: String },

    /// The component document is missing a table on the lookup path.
    #[error("table '{path}' not found in {file}")]
    MissingComponentTable { path: String, file: String },

    /// The `vendors` table does not have the expected shape.
    #[error("invalid 'vendors' table for component '{component}'")]
    InvalidVendorsTable {
        component: String,
        #[source]
        err: toml::de::Error,
    },

    /// A vendor script exited non-zero. The message is the script's captured
    /// stderr, or its stdout when stderr was empty, verbatim.
    #[error("{message}")]
    ScriptFailed {
        script: String,
        status: std::process::ExitStatus,
        message: String,
    },

    #[error(transparent)]
    TomlInvalid(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
