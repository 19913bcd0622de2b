use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeerStockError {
    #[error("Beer with name {name} already registered in the system.")]
    AlreadyRegistered { name: String },

    #[error("Beer with name {name} not found in the system.")]
    NotFound { name: String },

    #[error("Beer with id {id} not found in the system.")]
    NotFoundById { id: u64 },

    #[error("Beer id {id} is already taken by '{existing}'.")]
    IdAlreadyTaken { id: u64, existing: String },

    #[error("Beer with id {id} cannot take a stock change of {quantity}: the result would leave its stock bounds.")]
    StockExceeded { id: u64, quantity: u32 },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Conflict,
    Lookup,
    Stock,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BeerStockError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyRegistered { .. } | Self::IdAlreadyTaken { .. } => ErrorCategory::Conflict,
            Self::NotFound { .. } | Self::NotFoundById { .. } => ErrorCategory::Lookup,
            Self::StockExceeded { .. } => ErrorCategory::Stock,
            Self::Validation { .. } | Self::Config { .. } => ErrorCategory::Input,
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::System,
        }
    }

    /// Rejections of a single request are `Medium`; anything that prevents
    /// the tool from working at all is `High` or worse.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Conflict
            | ErrorCategory::Lookup
            | ErrorCategory::Stock => ErrorSeverity::Medium,
            ErrorCategory::Input => match self {
                Self::Config { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Io(e) => format!("Could not access the stock file: {}", e),
            Self::Serialization(e) => format!("The stock file is not valid JSON: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::AlreadyRegistered { .. } => "Use a different name or update the existing beer's stock",
            Self::IdAlreadyTaken { .. } => "Omit --id to let the stock assign one",
            Self::NotFound { .. } => "Run `beer-stock list` to see the registered names",
            Self::NotFoundById { .. } => "Run `beer-stock list` to see the registered ids",
            Self::StockExceeded { .. } => "Check the beer's current quantity and max before changing stock",
            Self::Validation { .. } => "Fix the highlighted field and try again",
            Self::Config { .. } => "Check the configuration file and command line flags",
            Self::Io(_) => "Check that the data file path exists and is writable",
            Self::Serialization(_) => "Restore the data file from a backup or remove it to start empty",
        }
    }
}

pub type Result<T> = std::result::Result<T, BeerStockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_medium() {
        let err = BeerStockError::NotFound {
            name: "Brahma".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "Beer with name Brahma not found in the system.");
    }

    #[test]
    fn test_id_conflict_is_medium_conflict() {
        let err = BeerStockError::IdAlreadyTaken {
            id: 1,
            existing: "Brahma".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "Beer id 1 is already taken by 'Brahma'.");
    }

    #[test]
    fn test_config_error_is_high() {
        let err = BeerStockError::Config {
            message: "bad".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: BeerStockError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("denied"));
    }
}
