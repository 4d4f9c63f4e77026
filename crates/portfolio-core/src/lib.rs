//! Core state for the portfolio page: the persisted settings store, the
//! playlist state machine and the small pure helpers around them.
//!
//! Nothing in here touches the browser; the web crate supplies storage,
//! media and view implementations of the traits defined below.

pub mod catalog;
pub mod constants;
pub mod effects;
pub mod env;
pub mod format;
pub mod panel;
pub mod player;
pub mod settings;
pub mod shortcuts;
pub mod storage;
pub mod store;
pub mod theme;
pub mod throttle;

pub use catalog::{default_catalog, Catalog, Track};
pub use effects::{ClassTarget, Decoration, Effect};
pub use env::{DeviceClass, EnvCapabilities};
pub use format::format_time;
pub use panel::{PanelSection, SettingsPanel};
pub use player::{
    MediaErrorKind, MediaHandle, PlayError, PlayTicket, PlayerView, PlaybackPhase,
    PlaylistController, VolumeIcon,
};
pub use settings::{DecorationPolicy, SettingPath, SettingValue, Settings, SettingsGroup};
pub use shortcuts::{shortcut_for_key, Modifiers, Shortcut};
pub use storage::{KeyValueStore, MemoryStorage, StorageError};
pub use store::{SettingsError, SettingsStore, SettingsView, StoreConfig};
pub use theme::{CustomTheme, Rgb};
pub use throttle::{Debounce, Throttle};
