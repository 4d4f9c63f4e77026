pub mod global;
pub mod keyboard;
pub mod player;
pub mod settings;

pub use global::wire_window_events;
pub use keyboard::wire_global_keydown;
pub use player::{wire_autoplay, wire_media_events, wire_transport};
pub use settings::{wire_panel, wire_settings_controls, wire_theme_controls};
