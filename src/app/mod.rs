pub mod helpline_app;

pub use helpline_app::HelplineApp;
