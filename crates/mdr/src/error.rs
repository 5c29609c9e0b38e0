//! CLI error types.

use mdr_config::ConfigError;
use mdr_flags::UnknownOptionError;
use mdr_pipeline::ConvertError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Options(#[from] UnknownOptionError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("input buffer allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
}

impl CliError {
    /// Process exit code reported for this error.
    ///
    /// 1 for option, configuration and rendering errors, 4 for allocation
    /// failures and 5 for I/O errors.
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::Allocation(_) | Self::Convert(ConvertError::Allocation(_)) => 4,
            Self::Io(_) => 5,
            Self::Options(_) | Self::Config(_) | Self::Convert(_) => 1,
        }
    }
}
