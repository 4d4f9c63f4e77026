//! Custom theme palette generation.
//!
//! Two user-picked colours (background and accent) expand into the full set
//! of theme CSS variables.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn darken(self, factor: f32) -> Rgb {
        let scale = |c: u8| (c as f32 * (1.0 - factor)).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    pub fn lighten(self, factor: f32) -> Rgb {
        let lift = |c: u8| (c as f32 + (255.0 - c as f32) * factor).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: lift(self.r),
            g: lift(self.g),
            b: lift(self.b),
        }
    }

    /// `ratio` of `self` mixed with `1 - ratio` of `other`.
    pub fn blend(self, other: Rgb, ratio: f32) -> Rgb {
        let mix = |a: u8, b: u8| {
            (a as f32 * ratio + b as f32 * (1.0 - ratio))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Black or white text, whichever reads better on `self` (YIQ brightness).
    pub fn contrast(self) -> Rgb {
        let brightness =
            (self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) as f32 / 1000.0;
        if brightness > 128.0 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Variables written by [`CustomTheme::palette`], in order.
pub const PALETTE_VARS: [&str; 16] = [
    "--primary-bg",
    "--primary-bg-rgb",
    "--secondary-bg",
    "--tertiary-bg",
    "--quaternary-bg",
    "--primary-text",
    "--secondary-text",
    "--tertiary-text",
    "--accent-color",
    "--border-color",
    "--hover-bg",
    "--shadow-light",
    "--shadow-dark",
    "--gradient-primary",
    "--gradient-secondary",
    "--gradient-accent",
];

/// The persisted custom theme (`{"primary":"#rrggbb","accent":"#rrggbb"}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTheme {
    pub primary: String,
    pub accent: String,
}

impl CustomTheme {
    /// Theme identifier stored in `preferred-theme` for custom palettes.
    pub const NAME: &'static str = "custom";

    pub fn new(primary: &str, accent: &str) -> Self {
        Self {
            primary: primary.to_string(),
            accent: accent.to_string(),
        }
    }

    /// Expand into `(css variable, value)` pairs. Unparseable colours fall
    /// back to black so the page never ends up with an empty palette.
    pub fn palette(&self) -> Vec<(&'static str, String)> {
        let primary = Rgb::from_hex(&self.primary).unwrap_or(Rgb::BLACK);
        let accent = Rgb::from_hex(&self.accent).unwrap_or(Rgb::BLACK);

        let secondary = primary.darken(0.1);
        let tertiary = primary.lighten(0.1);
        let quaternary = primary.lighten(0.2);
        let text = primary.contrast();
        let text_secondary = text.blend(accent, 0.7);
        let text_tertiary = text.blend(accent, 0.4);

        vec![
            ("--primary-bg", primary.to_string()),
            (
                "--primary-bg-rgb",
                format!("{}, {}, {}", primary.r, primary.g, primary.b),
            ),
            ("--secondary-bg", secondary.to_string()),
            ("--tertiary-bg", tertiary.to_string()),
            ("--quaternary-bg", quaternary.to_string()),
            ("--primary-text", text.to_string()),
            ("--secondary-text", text_secondary.to_string()),
            ("--tertiary-text", text_tertiary.to_string()),
            ("--accent-color", accent.to_string()),
            ("--border-color", format!("{accent}33")),
            ("--hover-bg", format!("{accent}1A")),
            ("--shadow-light", format!("{accent}4D")),
            ("--shadow-dark", format!("{primary}CC")),
            (
                "--gradient-primary",
                format!("linear-gradient(135deg, {primary} 0%, {secondary} 100%)"),
            ),
            (
                "--gradient-secondary",
                format!("linear-gradient(135deg, {secondary} 0%, {tertiary} 100%)"),
            ),
            (
                "--gradient-accent",
                format!(
                    "linear-gradient(135deg, {accent} 0%, {} 100%)",
                    accent.lighten(0.1)
                ),
            ),
        ]
    }
}
