//! DOM-facing effects derived from a settings snapshot.
//!
//! Every effect is absolute (set this variable, force this class on/off,
//! show/hide this layer) so re-applying a list never accumulates.

use crate::constants::REDUCED_ANIMATION_DURATION;
use crate::env::EnvCapabilities;
use crate::settings::{Settings, SettingsGroup};
use smallvec::SmallVec;

/// Where a class toggle lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassTarget {
    /// `<html>`
    Root,
    /// `<body>`
    Body,
}

/// Decorative layers the presentation code owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    CustomCursor,
    FloatingElements,
    CodeSnippets,
    GeometricShapes,
    Particles,
}

impl Decoration {
    pub const ALL: [Decoration; 5] = [
        Decoration::CustomCursor,
        Decoration::FloatingElements,
        Decoration::CodeSnippets,
        Decoration::GeometricShapes,
        Decoration::Particles,
    ];

    /// CSS selector matching the layer's elements.
    pub fn selector(self) -> &'static str {
        match self {
            Decoration::CustomCursor => ".custom-cursor, .cursor-follower",
            Decoration::FloatingElements => ".floating-element, .floating-emoji",
            Decoration::CodeSnippets => ".floating-code",
            Decoration::GeometricShapes => ".geometric-shape",
            Decoration::Particles => ".floating-tech-icon, .floating-symbols, .floating-contact-icons",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SetVar { name: &'static str, value: String },
    RemoveVar { name: &'static str },
    Class { target: ClassTarget, name: &'static str, on: bool },
    Visible { layer: Decoration, visible: bool },
}

pub type Effects = SmallVec<[Effect; 8]>;

/// Heavy animations are off while reduced motion or battery saver is on.
#[inline]
pub fn heavy_animations_suppressed(settings: &Settings) -> bool {
    settings.accessibility.reduced_motion || settings.performance.battery_saver
}

/// Effects owned by one settings group.
pub fn effects_for(group: SettingsGroup, settings: &Settings, env: &EnvCapabilities) -> Effects {
    let mut out = Effects::new();
    match group {
        SettingsGroup::Cursor => cursor_effects(settings, env, &mut out),
        // motion suppression reads accessibility.reducedMotion too, so both
        // groups re-derive the performance layer
        SettingsGroup::Performance => performance_effects(settings, &mut out),
        SettingsGroup::Accessibility => {
            accessibility_effects(settings, &mut out);
            performance_effects(settings, &mut out);
        }
        SettingsGroup::Misc => misc_effects(settings, &mut out),
    }
    out
}

fn cursor_effects(s: &Settings, env: &EnvCapabilities, out: &mut Effects) {
    let c = &s.cursor;
    out.push(Effect::SetVar {
        name: "--cursor-size",
        value: format!("{}px", c.size),
    });
    out.push(Effect::SetVar {
        name: "--cursor-opacity",
        value: fraction(c.opacity),
    });
    out.push(Effect::SetVar {
        name: "--follower-size",
        value: format!("{}px", c.follower_size),
    });
    let active = c.enabled && env.supports_custom_cursor();
    out.push(Effect::Class {
        target: ClassTarget::Body,
        name: "custom-cursor-active",
        on: active,
    });
    out.push(Effect::Visible {
        layer: Decoration::CustomCursor,
        visible: active,
    });
}

fn performance_effects(s: &Settings, out: &mut Effects) {
    let p = &s.performance;
    let suppressed = heavy_animations_suppressed(s);
    let floating = p.show_floating_elements && !suppressed;

    out.push(Effect::SetVar {
        name: "--animation-speed",
        value: fraction(p.animation_speed),
    });
    out.push(Effect::SetVar {
        name: "--parallax-intensity",
        value: fraction(p.parallax_intensity),
    });
    out.push(if suppressed {
        Effect::SetVar {
            name: "--animation-duration",
            value: REDUCED_ANIMATION_DURATION.to_string(),
        }
    } else {
        Effect::RemoveVar {
            name: "--animation-duration",
        }
    });
    out.push(Effect::Class {
        target: ClassTarget::Body,
        name: "battery-saver",
        on: p.battery_saver,
    });
    out.push(Effect::Visible {
        layer: Decoration::FloatingElements,
        visible: floating,
    });
    out.push(Effect::Visible {
        layer: Decoration::CodeSnippets,
        visible: floating && p.show_code_snippets,
    });
    out.push(Effect::Visible {
        layer: Decoration::GeometricShapes,
        visible: floating && p.show_geometric_shapes,
    });
    out.push(Effect::Visible {
        layer: Decoration::Particles,
        visible: floating && p.show_particles,
    });
}

fn accessibility_effects(s: &Settings, out: &mut Effects) {
    let a = &s.accessibility;
    out.push(Effect::Class {
        target: ClassTarget::Root,
        name: "smooth-scrolling",
        on: a.smooth_scrolling,
    });
    out.push(Effect::Class {
        target: ClassTarget::Root,
        name: "no-smooth-scrolling",
        on: !a.smooth_scrolling,
    });
    out.push(Effect::Class {
        target: ClassTarget::Body,
        name: "high-contrast",
        on: a.high_contrast,
    });
    out.push(Effect::Class {
        target: ClassTarget::Body,
        name: "focus-visible",
        on: a.focus_visible,
    });
}

fn misc_effects(s: &Settings, out: &mut Effects) {
    // read by the typing animation
    out.push(Effect::SetVar {
        name: "--typewriter-speed",
        value: fraction(s.misc.typewriter_speed),
    });
}

// 80 -> "0.8", 100 -> "1", 0 -> "0"
fn fraction(percent: i64) -> String {
    format!("{}", percent as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DecorationPolicy;

    fn desktop_settings() -> Settings {
        Settings::defaults_for(&EnvCapabilities::desktop(), DecorationPolicy::default())
    }

    #[test]
    fn fraction_formats_without_trailing_zeros() {
        assert_eq!(fraction(80), "0.8");
        assert_eq!(fraction(100), "1");
        assert_eq!(fraction(0), "0");
        assert_eq!(fraction(150), "1.5");
    }

    #[test]
    fn battery_saver_hides_every_decoration_layer() {
        let mut s = desktop_settings();
        s.performance.battery_saver = true;
        let effects = effects_for(SettingsGroup::Performance, &s, &EnvCapabilities::desktop());
        for layer in [
            Decoration::FloatingElements,
            Decoration::CodeSnippets,
            Decoration::GeometricShapes,
            Decoration::Particles,
        ] {
            assert!(effects.contains(&Effect::Visible {
                layer,
                visible: false
            }));
        }
        // the stored preference itself is untouched
        assert!(s.performance.show_floating_elements);
    }

    #[test]
    fn cursor_stays_hidden_on_touch_devices() {
        let s = desktop_settings();
        let mut env = EnvCapabilities::desktop();
        env.touch = true;
        let effects = effects_for(SettingsGroup::Cursor, &s, &env);
        assert!(effects.contains(&Effect::Visible {
            layer: Decoration::CustomCursor,
            visible: false
        }));
    }
}
