pub mod background_tasks;
pub mod session_state;
pub mod ui_state;

pub use background_tasks::BackgroundTasks;
pub use session_state::{Counters, LikeOutcome, SessionState};
pub use ui_state::UIState;
