//! Settings store: owns the record, its persistence and its DOM fan-out.

use crate::constants::{CUSTOM_THEME_KEY, PREFERRED_THEME_KEY, SETTINGS_KEY};
use crate::effects::{effects_for, Effect};
use crate::env::EnvCapabilities;
use crate::settings::{
    DecorationPolicy, SettingPath, SettingValue, Settings, SettingsGroup, UnknownSettingPath,
    ValueKindError,
};
use crate::storage::{KeyValueStore, StorageError};
use crate::theme::CustomTheme;
use log::LevelFilter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    UnknownPath(#[from] UnknownSettingPath),
    #[error(transparent)]
    WrongKind(#[from] ValueKindError),
    #[error("could not encode settings: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Sink for everything the store pushes at the page.
pub trait SettingsView {
    /// Apply one absolute effect (variable, class, layer visibility).
    fn apply(&mut self, effect: &Effect);
    /// Reflect one leaf into its input control and paired label.
    fn sync_control(&mut self, path: SettingPath, value: SettingValue);
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub settings_key: &'static str,
    pub theme_key: &'static str,
    pub custom_theme_key: &'static str,
    pub decoration_policy: DecorationPolicy,
    /// Max log level while debug mode is off.
    pub base_log_level: LevelFilter,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            settings_key: SETTINGS_KEY,
            theme_key: PREFERRED_THEME_KEY,
            custom_theme_key: CUSTOM_THEME_KEY,
            decoration_policy: DecorationPolicy::default(),
            base_log_level: LevelFilter::Info,
        }
    }
}

pub struct SettingsStore<K, V> {
    settings: Settings,
    env: EnvCapabilities,
    config: StoreConfig,
    storage: K,
    view: V,
}

impl<K: KeyValueStore, V: SettingsView> SettingsStore<K, V> {
    /// Build the record from environment defaults and whatever was
    /// persisted. Never fails: unreadable or corrupt data falls back to
    /// defaults.
    pub fn load(env: EnvCapabilities, config: StoreConfig, storage: K, view: V) -> Self {
        let mut settings = Settings::defaults_for(&env, config.decoration_policy);
        match storage.get(config.settings_key) {
            Ok(Some(blob)) => {
                if let Err(e) = settings.merge_persisted(&blob) {
                    log::debug!("[settings] failed to parse saved settings: {}", e);
                    settings = Settings::defaults_for(&env, config.decoration_policy);
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("[storage] could not read settings: {}", e),
        }
        settings.enforce_device_limits(&env);

        let store = Self {
            settings,
            env,
            config,
            storage,
            view,
        };
        store.sync_log_level();
        log::info!(
            "[settings] loaded for {} (low_end={}, reduced_motion={})",
            env.device.name(),
            env.is_low_end(),
            store.settings.accessibility.reduced_motion
        );
        store
    }

    #[inline]
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    /// Set one leaf by dotted key (`"performance.animationSpeed"`).
    pub fn set(&mut self, key: &str, value: SettingValue) -> Result<SettingValue, SettingsError> {
        let path: SettingPath = key.parse()?;
        self.set_path(path, value)
    }

    /// Set one leaf. Numbers are clamped into range; the stored value is
    /// returned, reflected into its control, applied and persisted.
    pub fn set_path(
        &mut self,
        path: SettingPath,
        value: SettingValue,
    ) -> Result<SettingValue, SettingsError> {
        let stored = self.settings.assign(path, value)?;
        log::debug!("[settings] {} = {:?}", path, stored);
        self.view.sync_control(path, stored);
        self.apply_group(path.group());
        if let Err(e) = self.save() {
            log::warn!("[storage] failed to save settings: {}", e);
        }
        Ok(stored)
    }

    /// Re-derive the effects of one group from the current record.
    pub fn apply_group(&mut self, group: SettingsGroup) {
        for effect in effects_for(group, &self.settings, &self.env) {
            self.view.apply(&effect);
        }
        if group == SettingsGroup::Misc {
            self.sync_log_level();
        }
    }

    /// Re-derive every effect. Safe to call at any time.
    pub fn apply_all(&mut self) {
        for group in SettingsGroup::ALL {
            self.apply_group(group);
        }
    }

    /// Push every leaf into its control.
    pub fn sync_controls(&mut self) {
        for path in SettingPath::ALL {
            self.view.sync_control(path, self.settings.value(path));
        }
    }

    /// Back to environment defaults: drops the persisted settings and theme
    /// keys and re-applies everything.
    pub fn reset(&mut self) {
        for key in [
            self.config.settings_key,
            self.config.theme_key,
            self.config.custom_theme_key,
        ] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("[storage] failed to remove '{}': {}", key, e);
            }
        }
        self.settings = Settings::defaults_for(&self.env, self.config.decoration_policy);
        self.settings.enforce_device_limits(&self.env);
        self.sync_controls();
        self.apply_all();
        log::info!("[settings] reset to defaults");
    }

    fn save(&mut self) -> Result<(), SettingsError> {
        let blob = serde_json::to_string(&self.settings)?;
        self.storage.set(self.config.settings_key, &blob)?;
        Ok(())
    }

    fn sync_log_level(&self) {
        let level = if self.settings.misc.debug_mode {
            LevelFilter::Debug
        } else {
            self.config.base_log_level
        };
        log::set_max_level(level);
    }

    // ---------------- Theme persistence ----------------

    pub fn theme_preference(&self) -> Option<String> {
        match self.storage.get(self.config.theme_key) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[storage] could not read theme preference: {}", e);
                None
            }
        }
    }

    /// Remember the chosen theme; any theme but `custom` drops the saved
    /// custom palette.
    pub fn save_theme_preference(&mut self, theme: &str) {
        if let Err(e) = self.storage.set(self.config.theme_key, theme) {
            log::debug!("[theme] failed to save theme preference: {}", e);
        }
        if theme != CustomTheme::NAME {
            if let Err(e) = self.storage.remove(self.config.custom_theme_key) {
                log::debug!("[theme] failed to remove custom theme: {}", e);
            }
        }
    }

    pub fn custom_theme(&self) -> Option<CustomTheme> {
        let blob = self.storage.get(self.config.custom_theme_key).ok()??;
        match serde_json::from_str::<CustomTheme>(&blob) {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::debug!("[theme] failed to load custom theme: {}", e);
                None
            }
        }
    }

    pub fn save_custom_theme(&mut self, theme: &CustomTheme) {
        let saved = serde_json::to_string(theme)
            .map_err(SettingsError::from)
            .and_then(|blob| {
                self.storage
                    .set(self.config.custom_theme_key, &blob)
                    .map_err(SettingsError::from)
            });
        if let Err(e) = saved {
            log::debug!("[theme] failed to save custom theme: {}", e);
        }
        self.save_theme_preference(CustomTheme::NAME);
    }
}
