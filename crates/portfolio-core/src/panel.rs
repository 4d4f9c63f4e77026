//! Settings panel navigation state.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelSection {
    Main,
    Mouse,
    Theme,
    Music,
    Performance,
    Accessibility,
    Misc,
}

impl PanelSection {
    pub const ALL: [PanelSection; 7] = [
        PanelSection::Main,
        PanelSection::Mouse,
        PanelSection::Theme,
        PanelSection::Music,
        PanelSection::Performance,
        PanelSection::Accessibility,
        PanelSection::Misc,
    ];

    /// Parse a `data-section` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            PanelSection::Main => "main",
            PanelSection::Mouse => "mouse",
            PanelSection::Theme => "theme",
            PanelSection::Music => "music",
            PanelSection::Performance => "performance",
            PanelSection::Accessibility => "accessibility",
            PanelSection::Misc => "misc",
        }
    }

    /// Id of the element holding the section.
    pub fn element_id(self) -> &'static str {
        match self {
            PanelSection::Main => "settingsMainMenu",
            PanelSection::Mouse => "mouseSection",
            PanelSection::Theme => "themeSection",
            PanelSection::Music => "musicSection",
            PanelSection::Performance => "performanceSection",
            PanelSection::Accessibility => "accessibilitySection",
            PanelSection::Misc => "miscSection",
        }
    }
}

/// Open/closed flag plus the visible section. Opening always lands on the
/// main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsPanel {
    open: bool,
    section: PanelSection,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self {
            open: false,
            section: PanelSection::Main,
        }
    }
}

impl SettingsPanel {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn section(&self) -> PanelSection {
        self.section
    }

    pub fn open(&mut self) {
        self.open = true;
        self.section = PanelSection::Main;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }

    /// A click landed somewhere on the page. Closes the panel when the click
    /// was outside it on a desktop layout; handheld layouts close through the
    /// close button only. Returns true if the panel was closed.
    pub fn dismiss_outside(&mut self, inside: bool, handheld: bool) -> bool {
        if !self.open || inside || handheld {
            return false;
        }
        self.close();
        true
    }

    pub fn show(&mut self, section: PanelSection) {
        self.section = section;
    }

    pub fn back(&mut self) {
        self.section = PanelSection::Main;
    }
}
