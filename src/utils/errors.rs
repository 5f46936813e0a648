use thiserror::Error;

/// Errors surfaced by directory actions and startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelplineError {
    /// Call rejected because the balance is below the call cost
    #[error("You don't have enough coins to make a call. You need at least {required} coins.")]
    InsufficientCoins { required: u32, balance: u32 },

    /// Action referenced an id that is not in the catalog
    #[error("Unknown service id: {0}")]
    UnknownService(u32),

    /// Platform clipboard unavailable or write refused
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Card icon could not be read or decoded
    #[error("Failed to load icon {path}: {reason}")]
    Icon { path: String, reason: String },

    /// Bad configuration value
    #[error("Invalid value {value:?} for {key}")]
    Config { key: String, value: String },
}

impl From<arboard::Error> for HelplineError {
    fn from(err: arboard::Error) -> Self {
        HelplineError::Clipboard(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_coins_message_names_minimum() {
        let err = HelplineError::InsufficientCoins { required: 20, balance: 15 };
        assert_eq!(
            err.to_string(),
            "You don't have enough coins to make a call. You need at least 20 coins."
        );
    }

    #[test]
    fn test_config_message_names_key() {
        let err = HelplineError::Config {
            key: "HELPLINE_STARTING_COINS".to_string(),
            value: "lots".to_string(),
        };
        assert!(err.to_string().contains("HELPLINE_STARTING_COINS"));
        assert!(err.to_string().contains("\"lots\""));
    }
}
