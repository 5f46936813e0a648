//! Application constants and configuration values

// === Window ===
pub const APP_WIDTH: f32 = 1280.0;
pub const APP_HEIGHT: f32 = 820.0;
pub const APP_MIN_WIDTH: f32 = 720.0;
pub const APP_MIN_HEIGHT: f32 = 560.0;

// === Layout ===
pub const CARD_WIDTH: f32 = 260.0;
pub const CARD_SPACING: f32 = 16.0;
pub const CARD_ICON_SIZE: f32 = 32.0;
pub const HISTORY_PANEL_WIDTH: f32 = 320.0;

// Poll interval while clipboard writes are outstanding
pub const CLIPBOARD_POLL_MILLIS: u64 = 50;

// === Economy ===
pub const CALL_COST: u32 = 20;
pub const DEFAULT_STARTING_COINS: u32 = 100;

// === Branding ===
pub const ACCENT_GREEN_RGB: (u8, u8, u8) = (0, 166, 62);
pub const HEART_ACTIVE_RGB: (u8, u8, u8) = (229, 57, 53);
pub const COIN_GOLD_RGB: (u8, u8, u8) = (245, 180, 0);

// === Assets ===
pub const DEFAULT_ASSETS_DIR: &str = "assets";
