// Data models for the helpline directory

pub mod history;
pub mod service;

// Re-export commonly used types
pub use history::HistoryEntry;
pub use service::ServiceRecord;
