//! Global keyboard shortcuts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlay,
    NextTrack,
    PrevTrack,
    CloseSettings,
    ToggleSettings,
}

/// Modifier state of a key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

/// Map a `KeyboardEvent.code` plus modifiers to a shortcut.
#[inline]
pub fn shortcut_for_key(code: &str, mods: Modifiers) -> Option<Shortcut> {
    match code {
        "Space" => Some(Shortcut::TogglePlay),
        "ArrowRight" if mods.ctrl => Some(Shortcut::NextTrack),
        "ArrowLeft" if mods.ctrl => Some(Shortcut::PrevTrack),
        "Escape" => Some(Shortcut::CloseSettings),
        "KeyS" if mods.ctrl || mods.meta => Some(Shortcut::ToggleSettings),
        _ => None,
    }
}

/// Shortcuts stay out of the way while the user types into a field.
#[inline]
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}
