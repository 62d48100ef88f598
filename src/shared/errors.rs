//! Error handling for the application

use thiserror::Error;

/// Pool table errors
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),
}

/// Swap form errors
#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Cannot swap {0} against itself")]
    SameAsset(String),

    #[error("Unknown asset: {0}")]
    UnknownAsset(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Pool error: {0}")]
    PoolError(String),

    #[error("Swap error: {0}")]
    SwapError(String),
}

impl From<PoolError> for AppError {
    fn from(err: PoolError) -> Self {
        AppError::PoolError(err.to_string())
    }
}

impl From<SwapError> for AppError {
    fn from(err: SwapError) -> Self {
        AppError::SwapError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err: AppError = PoolError::UnknownSortKey("fees".to_string()).into();
        assert_eq!(err.to_string(), "Pool error: Unknown sort key: fees");

        let err: AppError = SwapError::SameAsset("ETH".to_string()).into();
        assert_eq!(err.to_string(), "Swap error: Cannot swap ETH against itself");
    }
}
