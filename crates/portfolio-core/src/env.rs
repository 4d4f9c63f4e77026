//! Device and environment signals, gathered once at startup.
//!
//! The web frontend reads the user agent, touch support, the
//! `prefers-reduced-motion` media query and `hardwareConcurrency` exactly
//! once and hands the resulting [`EnvCapabilities`] to the settings store.

use crate::constants::LOW_END_CORE_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Classify from a user-agent string.
    pub fn from_user_agent(ua: &str) -> Self {
        let ua = ua.to_ascii_lowercase();
        if is_tablet_ua(&ua) {
            DeviceClass::Tablet
        } else if is_mobile_ua(&ua) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Phones and tablets both count as handheld for defaults.
    #[inline]
    pub fn is_handheld(self) -> bool {
        !matches!(self, DeviceClass::Desktop)
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

fn is_mobile_ua(ua: &str) -> bool {
    MOBILE_MARKERS.iter().any(|m| ua.contains(m))
}

// iPad, or Android without a "mobile" token after it
fn is_tablet_ua(ua: &str) -> bool {
    if ua.contains("ipad") {
        return true;
    }
    match ua.find("android") {
        Some(at) => !ua[at..].contains("mobile"),
        None => false,
    }
}

/// Immutable snapshot of what the page is running on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvCapabilities {
    pub device: DeviceClass,
    pub touch: bool,
    pub prefers_reduced_motion: bool,
    pub logical_cores: Option<u32>,
}

impl EnvCapabilities {
    pub fn desktop() -> Self {
        Self {
            device: DeviceClass::Desktop,
            touch: false,
            prefers_reduced_motion: false,
            logical_cores: Some(8),
        }
    }

    pub fn mobile() -> Self {
        Self {
            device: DeviceClass::Mobile,
            touch: true,
            prefers_reduced_motion: false,
            logical_cores: Some(8),
        }
    }

    #[inline]
    pub fn is_handheld(&self) -> bool {
        self.device.is_handheld()
    }

    /// Unknown core counts are not treated as low-end.
    #[inline]
    pub fn is_low_end(&self) -> bool {
        self.logical_cores
            .map(|n| n < LOW_END_CORE_THRESHOLD)
            .unwrap_or(false)
    }

    /// The custom cursor only makes sense with a mouse on a desktop.
    #[inline]
    pub fn supports_custom_cursor(&self) -> bool {
        !self.is_handheld() && !self.touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_user_agents() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";
        let ipad = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) Mobile/15E148";
        let pixel = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Chrome/120.0 Mobile Safari/537.36";
        let galaxy_tab = "Mozilla/5.0 (Linux; Android 13; SM-X700) Chrome/120.0 Safari/537.36";
        let mac = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) Safari/605.1.15";

        assert_eq!(DeviceClass::from_user_agent(iphone), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(ipad), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_user_agent(pixel), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(galaxy_tab), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_user_agent(mac), DeviceClass::Desktop);
    }

    #[test]
    fn low_end_needs_known_core_count() {
        let mut env = EnvCapabilities::desktop();
        env.logical_cores = Some(2);
        assert!(env.is_low_end());
        env.logical_cores = None;
        assert!(!env.is_low_end());
    }
}
