pub mod directory;
pub mod history;
