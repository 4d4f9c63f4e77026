//! The persisted settings record and its leaf addressing.
//!
//! Field names serialize in camelCase so blobs written by earlier versions
//! of the page (`{"cursor":{"followerSize":36},...}`) keep loading.

use crate::constants::*;
use crate::env::EnvCapabilities;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorSettings {
    pub enabled: bool,
    pub size: i64,
    pub opacity: i64,
    pub follower_size: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSettings {
    pub show_floating_elements: bool,
    pub show_particles: bool,
    pub show_code_snippets: bool,
    pub show_geometric_shapes: bool,
    pub animation_speed: i64,
    pub parallax_intensity: i64,
    pub battery_saver: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    pub reduced_motion: bool,
    pub smooth_scrolling: bool,
    pub high_contrast: bool,
    pub focus_visible: bool,
    pub screen_reader: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscSettings {
    pub autoplay_music: bool,
    pub screen_shake: bool,
    pub typewriter_speed: i64,
    pub debug_mode: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub cursor: CursorSettings,
    pub performance: PerformanceSettings,
    pub accessibility: AccessibilitySettings,
    pub misc: MiscSettings,
}

/// Whether decorative layers default to off on phones and tablets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DecorationPolicy {
    #[default]
    HideOnHandheld,
    ShowEverywhere,
}

impl Settings {
    /// Defaults derived from the environment.
    pub fn defaults_for(env: &EnvCapabilities, policy: DecorationPolicy) -> Self {
        let handheld = env.is_handheld();
        let low_end = env.is_low_end();
        let decorations = match policy {
            DecorationPolicy::HideOnHandheld => !handheld,
            DecorationPolicy::ShowEverywhere => true,
        };
        let animation_speed = if handheld {
            HANDHELD_ANIMATION_CAP
        } else if low_end {
            LOW_END_ANIMATION_SPEED
        } else {
            100
        };
        Self {
            cursor: CursorSettings {
                enabled: env.supports_custom_cursor(),
                size: 12,
                opacity: 100,
                follower_size: 36,
            },
            performance: PerformanceSettings {
                show_floating_elements: decorations,
                show_particles: decorations,
                show_code_snippets: decorations,
                show_geometric_shapes: decorations,
                animation_speed,
                parallax_intensity: if handheld { 0 } else { 100 },
                battery_saver: false,
            },
            accessibility: AccessibilitySettings {
                reduced_motion: env.prefers_reduced_motion || low_end || handheld,
                smooth_scrolling: true,
                high_contrast: false,
                focus_visible: true,
                screen_reader: true,
            },
            misc: MiscSettings {
                autoplay_music: false,
                screen_shake: !handheld,
                typewriter_speed: 100,
                debug_mode: false,
            },
        }
    }

    /// Handheld constraints always beat stored preferences.
    pub fn enforce_device_limits(&mut self, env: &EnvCapabilities) {
        if !env.is_handheld() {
            return;
        }
        self.cursor.enabled = false;
        self.performance.parallax_intensity = 0;
        self.performance.animation_speed = self
            .performance
            .animation_speed
            .min(HANDHELD_ANIMATION_CAP);
        self.misc.screen_shake = false;
    }

    /// Clamp every numeric leaf into its declared range.
    pub fn clamp_all(&mut self) {
        for path in SettingPath::ALL {
            if let Some(range) = path.range() {
                if let SettingValue::Int(v) = self.value(path) {
                    self.write(path, SettingValue::Int(v.clamp(range.0, range.1)));
                }
            }
        }
    }

    /// Read one leaf.
    pub fn value(&self, path: SettingPath) -> SettingValue {
        use SettingPath::*;
        use SettingValue::{Bool, Int};
        match path {
            CursorEnabled => Bool(self.cursor.enabled),
            CursorSize => Int(self.cursor.size),
            CursorOpacity => Int(self.cursor.opacity),
            CursorFollowerSize => Int(self.cursor.follower_size),
            ShowFloatingElements => Bool(self.performance.show_floating_elements),
            ShowParticles => Bool(self.performance.show_particles),
            ShowCodeSnippets => Bool(self.performance.show_code_snippets),
            ShowGeometricShapes => Bool(self.performance.show_geometric_shapes),
            AnimationSpeed => Int(self.performance.animation_speed),
            ParallaxIntensity => Int(self.performance.parallax_intensity),
            BatterySaver => Bool(self.performance.battery_saver),
            ReducedMotion => Bool(self.accessibility.reduced_motion),
            SmoothScrolling => Bool(self.accessibility.smooth_scrolling),
            HighContrast => Bool(self.accessibility.high_contrast),
            FocusVisible => Bool(self.accessibility.focus_visible),
            ScreenReader => Bool(self.accessibility.screen_reader),
            AutoplayMusic => Bool(self.misc.autoplay_music),
            ScreenShake => Bool(self.misc.screen_shake),
            TypewriterSpeed => Int(self.misc.typewriter_speed),
            DebugMode => Bool(self.misc.debug_mode),
        }
    }

    /// Write one leaf after checking the value kind and clamping numbers.
    /// Returns the value actually stored.
    pub fn assign(
        &mut self,
        path: SettingPath,
        value: SettingValue,
    ) -> Result<SettingValue, ValueKindError> {
        let stored = match (path.kind(), value) {
            (ValueKind::Bool, SettingValue::Bool(b)) => SettingValue::Bool(b),
            (ValueKind::Int, SettingValue::Int(n)) => {
                let (lo, hi) = path.range().unwrap_or((i64::MIN, i64::MAX));
                SettingValue::Int(n.clamp(lo, hi))
            }
            (expected, _) => return Err(ValueKindError { path, expected }),
        };
        self.write(path, stored);
        Ok(stored)
    }

    fn write(&mut self, path: SettingPath, value: SettingValue) {
        use SettingPath::*;
        match (path, value) {
            (CursorEnabled, SettingValue::Bool(b)) => self.cursor.enabled = b,
            (CursorSize, SettingValue::Int(n)) => self.cursor.size = n,
            (CursorOpacity, SettingValue::Int(n)) => self.cursor.opacity = n,
            (CursorFollowerSize, SettingValue::Int(n)) => self.cursor.follower_size = n,
            (ShowFloatingElements, SettingValue::Bool(b)) => {
                self.performance.show_floating_elements = b
            }
            (ShowParticles, SettingValue::Bool(b)) => self.performance.show_particles = b,
            (ShowCodeSnippets, SettingValue::Bool(b)) => self.performance.show_code_snippets = b,
            (ShowGeometricShapes, SettingValue::Bool(b)) => {
                self.performance.show_geometric_shapes = b
            }
            (AnimationSpeed, SettingValue::Int(n)) => self.performance.animation_speed = n,
            (ParallaxIntensity, SettingValue::Int(n)) => self.performance.parallax_intensity = n,
            (BatterySaver, SettingValue::Bool(b)) => self.performance.battery_saver = b,
            (ReducedMotion, SettingValue::Bool(b)) => self.accessibility.reduced_motion = b,
            (SmoothScrolling, SettingValue::Bool(b)) => self.accessibility.smooth_scrolling = b,
            (HighContrast, SettingValue::Bool(b)) => self.accessibility.high_contrast = b,
            (FocusVisible, SettingValue::Bool(b)) => self.accessibility.focus_visible = b,
            (ScreenReader, SettingValue::Bool(b)) => self.accessibility.screen_reader = b,
            (AutoplayMusic, SettingValue::Bool(b)) => self.misc.autoplay_music = b,
            (ScreenShake, SettingValue::Bool(b)) => self.misc.screen_shake = b,
            (TypewriterSpeed, SettingValue::Int(n)) => self.misc.typewriter_speed = n,
            (DebugMode, SettingValue::Bool(b)) => self.misc.debug_mode = b,
            // kinds are checked by `assign`
            _ => {}
        }
    }

    /// Overlay a persisted JSON blob onto `self`.
    ///
    /// Each top-level group present in the blob replaces the matching fields
    /// of the current group; fields it lacks keep their current value. A
    /// group whose fields have the wrong JSON types is skipped whole.
    pub fn merge_persisted(&mut self, blob: &str) -> Result<(), serde_json::Error> {
        let parsed: Map<String, Value> = serde_json::from_str(blob)?;
        merge_group(&mut self.cursor, parsed.get("cursor"));
        merge_group(&mut self.performance, parsed.get("performance"));
        merge_group(&mut self.accessibility, parsed.get("accessibility"));
        merge_group(&mut self.misc, parsed.get("misc"));
        self.clamp_all();
        Ok(())
    }
}

fn merge_group<T>(group: &mut T, persisted: Option<&Value>)
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let Some(Value::Object(fields)) = persisted else {
        return;
    };
    let Ok(Value::Object(mut base)) = serde_json::to_value(&*group) else {
        return;
    };
    for (k, v) in fields {
        if base.contains_key(k) {
            base.insert(k.clone(), v.clone());
        }
    }
    match serde_json::from_value::<T>(Value::Object(base)) {
        Ok(merged) => *group = merged,
        Err(e) => log::warn!("[settings] ignoring malformed persisted group: {}", e),
    }
}

/// Top-level sub-groups of the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsGroup {
    Cursor,
    Performance,
    Accessibility,
    Misc,
}

impl SettingsGroup {
    pub const ALL: [SettingsGroup; 4] = [
        SettingsGroup::Cursor,
        SettingsGroup::Performance,
        SettingsGroup::Accessibility,
        SettingsGroup::Misc,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
}

impl SettingValue {
    pub fn as_int(self) -> Option<i64> {
        match self {
            SettingValue::Int(n) => Some(n),
            SettingValue::Bool(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("setting '{path}' expects a {expected:?} value")]
pub struct ValueKindError {
    pub path: SettingPath,
    pub expected: ValueKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown setting '{0}'")]
pub struct UnknownSettingPath(pub String);

/// One addressable leaf of [`Settings`], named by its dotted key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingPath {
    CursorEnabled,
    CursorSize,
    CursorOpacity,
    CursorFollowerSize,
    ShowFloatingElements,
    ShowParticles,
    ShowCodeSnippets,
    ShowGeometricShapes,
    AnimationSpeed,
    ParallaxIntensity,
    BatterySaver,
    ReducedMotion,
    SmoothScrolling,
    HighContrast,
    FocusVisible,
    ScreenReader,
    AutoplayMusic,
    ScreenShake,
    TypewriterSpeed,
    DebugMode,
}

impl SettingPath {
    pub const ALL: [SettingPath; 20] = [
        SettingPath::CursorEnabled,
        SettingPath::CursorSize,
        SettingPath::CursorOpacity,
        SettingPath::CursorFollowerSize,
        SettingPath::ShowFloatingElements,
        SettingPath::ShowParticles,
        SettingPath::ShowCodeSnippets,
        SettingPath::ShowGeometricShapes,
        SettingPath::AnimationSpeed,
        SettingPath::ParallaxIntensity,
        SettingPath::BatterySaver,
        SettingPath::ReducedMotion,
        SettingPath::SmoothScrolling,
        SettingPath::HighContrast,
        SettingPath::FocusVisible,
        SettingPath::ScreenReader,
        SettingPath::AutoplayMusic,
        SettingPath::ScreenShake,
        SettingPath::TypewriterSpeed,
        SettingPath::DebugMode,
    ];

    pub fn key(self) -> &'static str {
        use SettingPath::*;
        match self {
            CursorEnabled => "cursor.enabled",
            CursorSize => "cursor.size",
            CursorOpacity => "cursor.opacity",
            CursorFollowerSize => "cursor.followerSize",
            ShowFloatingElements => "performance.showFloatingElements",
            ShowParticles => "performance.showParticles",
            ShowCodeSnippets => "performance.showCodeSnippets",
            ShowGeometricShapes => "performance.showGeometricShapes",
            AnimationSpeed => "performance.animationSpeed",
            ParallaxIntensity => "performance.parallaxIntensity",
            BatterySaver => "performance.batterySaver",
            ReducedMotion => "accessibility.reducedMotion",
            SmoothScrolling => "accessibility.smoothScrolling",
            HighContrast => "accessibility.highContrast",
            FocusVisible => "accessibility.focusVisible",
            ScreenReader => "accessibility.screenReader",
            AutoplayMusic => "misc.autoplayMusic",
            ScreenShake => "misc.screenShake",
            TypewriterSpeed => "misc.typewriterSpeed",
            DebugMode => "misc.debugMode",
        }
    }

    /// The DOM control id bound to this leaf.
    pub fn control_id(self) -> &'static str {
        let key = self.key();
        key.split_once('.').map(|(_, leaf)| leaf).unwrap_or(key)
    }

    pub fn group(self) -> SettingsGroup {
        use SettingPath::*;
        match self {
            CursorEnabled | CursorSize | CursorOpacity | CursorFollowerSize => {
                SettingsGroup::Cursor
            }
            ShowFloatingElements | ShowParticles | ShowCodeSnippets | ShowGeometricShapes
            | AnimationSpeed | ParallaxIntensity | BatterySaver => SettingsGroup::Performance,
            ReducedMotion | SmoothScrolling | HighContrast | FocusVisible | ScreenReader => {
                SettingsGroup::Accessibility
            }
            AutoplayMusic | ScreenShake | TypewriterSpeed | DebugMode => SettingsGroup::Misc,
        }
    }

    pub fn kind(self) -> ValueKind {
        if self.range().is_some() {
            ValueKind::Int
        } else {
            ValueKind::Bool
        }
    }

    /// Inclusive range for numeric leaves.
    pub fn range(self) -> Option<(i64, i64)> {
        use SettingPath::*;
        match self {
            CursorSize => Some((CURSOR_SIZE_MIN, CURSOR_SIZE_MAX)),
            CursorFollowerSize => Some((CURSOR_FOLLOWER_MIN, CURSOR_FOLLOWER_MAX)),
            CursorOpacity | ParallaxIntensity | TypewriterSpeed => Some((0, PERCENT_MAX)),
            AnimationSpeed => Some((0, ANIMATION_SPEED_MAX)),
            _ => None,
        }
    }

    /// Text for the numeric label paired with a slider ("12px", "80%").
    pub fn display_value(self, value: SettingValue) -> Option<String> {
        let n = value.as_int()?;
        match self {
            SettingPath::CursorSize | SettingPath::CursorFollowerSize => Some(format!("{n}px")),
            _ => Some(format!("{n}%")),
        }
    }
}

impl fmt::Display for SettingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingPath {
    type Err = UnknownSettingPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingPath::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| UnknownSettingPath(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvCapabilities;

    #[test]
    fn every_path_round_trips_through_its_key() {
        for path in SettingPath::ALL {
            assert_eq!(path.key().parse::<SettingPath>(), Ok(path));
        }
        assert!("cursor.colour".parse::<SettingPath>().is_err());
    }

    #[test]
    fn control_ids_are_leaf_names() {
        assert_eq!(SettingPath::CursorFollowerSize.control_id(), "followerSize");
        assert_eq!(SettingPath::DebugMode.control_id(), "debugMode");
    }

    #[test]
    fn assign_rejects_wrong_kind() {
        let mut s = Settings::defaults_for(&EnvCapabilities::desktop(), DecorationPolicy::default());
        let err = s
            .assign(SettingPath::CursorEnabled, SettingValue::Int(1))
            .unwrap_err();
        assert_eq!(err.expected, ValueKind::Bool);
        assert!(s.cursor.enabled);
    }

    #[test]
    fn merge_keeps_missing_fields_within_a_group() {
        let mut s = Settings::defaults_for(&EnvCapabilities::desktop(), DecorationPolicy::default());
        s.merge_persisted(r#"{"cursor":{"size":20}}"#).unwrap();
        assert_eq!(s.cursor.size, 20);
        assert_eq!(s.cursor.follower_size, 36);
        assert!(s.cursor.enabled);
    }

    #[test]
    fn merge_skips_group_with_wrong_types() {
        let mut s = Settings::defaults_for(&EnvCapabilities::desktop(), DecorationPolicy::default());
        s.merge_persisted(r#"{"misc":{"debugMode":"yes"},"cursor":{"opacity":40}}"#)
            .unwrap();
        assert!(!s.misc.debug_mode);
        assert_eq!(s.cursor.opacity, 40);
    }

    #[test]
    fn merge_clamps_out_of_range_values() {
        let mut s = Settings::defaults_for(&EnvCapabilities::desktop(), DecorationPolicy::default());
        s.merge_persisted(r#"{"performance":{"animationSpeed":900}}"#)
            .unwrap();
        assert_eq!(s.performance.animation_speed, ANIMATION_SPEED_MAX);
    }
}
