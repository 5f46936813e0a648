pub mod artwork;
pub mod clipboard;
pub mod errors;
pub mod formatting;

// Re-export commonly used types
pub use errors::HelplineError;
