// Keyboard shortcuts, settings panel navigation and time formatting.

use portfolio_core::panel::{PanelSection, SettingsPanel};
use portfolio_core::shortcuts::{is_text_entry, shortcut_for_key, Modifiers, Shortcut};
use portfolio_core::format_time;

const NONE: Modifiers = Modifiers {
    ctrl: false,
    meta: false,
};
const CTRL: Modifiers = Modifiers {
    ctrl: true,
    meta: false,
};
const META: Modifiers = Modifiers {
    ctrl: false,
    meta: true,
};

#[test]
fn transport_shortcuts() {
    assert_eq!(shortcut_for_key("Space", NONE), Some(Shortcut::TogglePlay));
    assert_eq!(shortcut_for_key("ArrowRight", CTRL), Some(Shortcut::NextTrack));
    assert_eq!(shortcut_for_key("ArrowLeft", CTRL), Some(Shortcut::PrevTrack));
    // plain arrows scroll the page
    assert_eq!(shortcut_for_key("ArrowRight", NONE), None);
    assert_eq!(shortcut_for_key("ArrowLeft", META), None);
}

#[test]
fn settings_shortcuts() {
    assert_eq!(shortcut_for_key("Escape", NONE), Some(Shortcut::CloseSettings));
    assert_eq!(shortcut_for_key("KeyS", CTRL), Some(Shortcut::ToggleSettings));
    assert_eq!(shortcut_for_key("KeyS", META), Some(Shortcut::ToggleSettings));
    assert_eq!(shortcut_for_key("KeyS", NONE), None);
    assert_eq!(shortcut_for_key("KeyQ", CTRL), None);
}

#[test]
fn typing_targets_are_excluded() {
    assert!(is_text_entry("INPUT"));
    assert!(is_text_entry("TEXTAREA"));
    assert!(!is_text_entry("BUTTON"));
    assert!(!is_text_entry("BODY"));
}

#[test]
fn panel_opens_on_the_main_menu() {
    let mut panel = SettingsPanel::default();
    assert!(!panel.is_open());

    assert!(panel.toggle());
    assert_eq!(panel.section(), PanelSection::Main);
    panel.show(PanelSection::Music);
    assert_eq!(panel.section(), PanelSection::Music);
    panel.back();
    assert_eq!(panel.section(), PanelSection::Main);

    panel.show(PanelSection::Theme);
    assert!(!panel.toggle());
    panel.open();
    assert_eq!(panel.section(), PanelSection::Main);
}

#[test]
fn outside_click_closes_the_panel_on_desktop_only() {
    let mut panel = SettingsPanel::default();
    assert!(!panel.dismiss_outside(false, false));

    panel.open();
    assert!(!panel.dismiss_outside(true, false));
    assert!(panel.is_open());
    assert!(!panel.dismiss_outside(false, true));
    assert!(panel.is_open());

    assert!(panel.dismiss_outside(false, false));
    assert!(!panel.is_open());
}

#[test]
fn sections_parse_from_data_attributes() {
    for section in PanelSection::ALL {
        assert_eq!(PanelSection::from_name(section.name()), Some(section));
    }
    assert_eq!(PanelSection::from_name("network"), None);
    assert_eq!(PanelSection::Mouse.element_id(), "mouseSection");
    assert_eq!(PanelSection::Main.element_id(), "settingsMainMenu");
}

#[test]
fn clock_text() {
    assert_eq!(format_time(166.0), "2:46");
    assert_eq!(format_time(f64::NAN), "0:00");
}
