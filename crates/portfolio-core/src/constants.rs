// Shared tuning constants used by the store, the player and the web frontend.

// Persisted keys (localStorage)
pub const SETTINGS_KEY: &str = "portfolio-settings";
pub const PREFERRED_THEME_KEY: &str = "preferred-theme";
pub const CUSTOM_THEME_KEY: &str = "custom-theme";

// Cursor ranges (px / percent)
pub const CURSOR_SIZE_MIN: i64 = 4;
pub const CURSOR_SIZE_MAX: i64 = 40;
pub const CURSOR_FOLLOWER_MIN: i64 = 12;
pub const CURSOR_FOLLOWER_MAX: i64 = 80;
pub const PERCENT_MAX: i64 = 100;

// Animation speed may exceed 100% (fast-forward)
pub const ANIMATION_SPEED_MAX: i64 = 200;

// Handheld devices never animate faster than this (percent)
pub const HANDHELD_ANIMATION_CAP: i64 = 70;
// Low-resource devices start at half speed
pub const LOW_END_ANIMATION_SPEED: i64 = 50;
// Fewer logical cores than this marks a low-resource device
pub const LOW_END_CORE_THRESHOLD: u32 = 4;

// Duration forced onto heavy animations when motion is reduced
pub const REDUCED_ANIMATION_DURATION: &str = "0.1s";

// Player
pub const DEFAULT_VOLUME: f64 = 0.7;
pub const VOLUME_LOW_THRESHOLD: f64 = 0.5;
// timeupdate fires ~4-66Hz; redraw at most this often
pub const TIME_UPDATE_INTERVAL_MS: u64 = 100;
// quiet period after the last resize before effects are re-applied
pub const RESIZE_DEBOUNCE_MS: u64 = 250;
