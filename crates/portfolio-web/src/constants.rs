// DOM ids and selectors the front-end binds to.

// Player
pub const AUDIO_ID: &str = "audioPlayer";
pub const PLAY_PAUSE_ID: &str = "playPauseBtn";
pub const PREV_ID: &str = "prevBtn";
pub const NEXT_ID: &str = "nextBtn";
pub const PROGRESS_BAR_ID: &str = "progressBar";
pub const PROGRESS_FILL_ID: &str = "progressFill";
pub const VOLUME_SLIDER_ID: &str = "volumeSlider";
pub const VOLUME_FILL_ID: &str = "volumeSliderFill";
pub const CURRENT_TIME_ID: &str = "currentTime";
pub const DURATION_ID: &str = "duration";
pub const TRACK_TITLE_ID: &str = "currentTrackTitle";
pub const TRACK_ARTIST_ID: &str = "currentTrackArtist";
pub const AUDIO_ERROR_ID: &str = "audioError";
pub const PLAYLIST_ROW_SELECTOR: &str = ".playlist-item";
pub const PLAY_ICON_SELECTOR: &str = ".play-icon";
pub const PAUSE_ICON_SELECTOR: &str = ".pause-icon";
pub const VOLUME_ICON_PATH_SELECTOR: &str = ".volume-icon-container svg path";

// Settings panel
pub const SETTINGS_BUTTON_ID: &str = "settingsBtn";
pub const SETTINGS_MENU_ID: &str = "settingsMenu";
pub const SETTINGS_CLOSE_ID: &str = "settingsCloseBtn";
pub const RESET_SETTINGS_ID: &str = "resetSettings";
pub const SECTION_VIEW_SELECTOR: &str = ".settings-section-view";
pub const CATEGORY_SELECTOR: &str = ".settings-category";
pub const BACK_BUTTON_SELECTOR: &str = ".settings-back-btn";
pub const SCROLL_CONTAINER_SELECTOR: &str = ".settings-scroll-container";
pub const RESET_CONFIRM_TEXT: &str =
    "Reset all settings to their defaults? Your theme choice will be cleared too.";

// Themes
pub const THEME_OPTION_SELECTOR: &str = ".theme-option";
pub const PRIMARY_COLOR_ID: &str = "primaryColor";
pub const ACCENT_COLOR_ID: &str = "accentColor";
pub const APPLY_CUSTOM_THEME_ID: &str = "applyCustomTheme";
pub const DEFAULT_THEME: &str = "default";

// Shared
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";

// SVG paths for the three volume states
pub const VOLUME_MUTED_PATH: &str = "M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.21l2.45 2.45c.03-.2.05-.41.05-.63zm2.5 0c0 .94-.2 1.82-.54 2.64l1.51 1.51C20.63 14.91 21 13.5 21 12c0-4.28-2.99-7.86-7-8.77v2.06c2.89.86 5 3.54 5 6.71zM4.27 3L3 4.27 7.73 9H3v6h4l5 5v-6.73l4.25 4.25c-.67.52-1.42.93-2.25 1.18v2.06c1.38-.31 2.63-.95 3.69-1.81L19.73 21 21 19.73l-9-9L4.27 3zM12 4L9.91 6.09 12 8.18V4z";
pub const VOLUME_LOW_PATH: &str =
    "M18.5 12c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM5 9v6h4l5 5V4L9 9H5z";
pub const VOLUME_FULL_PATH: &str = "M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 7-4.49 7-8.77s-2.99-7.86-7-8.77z";
