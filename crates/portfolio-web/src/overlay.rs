//! Settings panel: open/close and section navigation.

use crate::constants::*;
use crate::dom::{html_element, query_all, set_class};
use portfolio_core::{PanelSection, SettingsPanel};
use web_sys as web;

pub struct PanelUi {
    document: web::Document,
    menu: Option<web::Element>,
    button: Option<web::Element>,
    // handheld layouts lock page scroll and ignore outside clicks
    handheld: bool,
    state: SettingsPanel,
}

impl PanelUi {
    pub fn bind(document: &web::Document, handheld: bool) -> Self {
        Self {
            document: document.clone(),
            menu: document.get_element_by_id(SETTINGS_MENU_ID),
            button: document.get_element_by_id(SETTINGS_BUTTON_ID),
            handheld,
            state: SettingsPanel::default(),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn open(&mut self) {
        self.state.open();
        self.render_open();
        self.render_section();
    }

    pub fn close(&mut self) {
        self.state.close();
        self.render_open();
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
        self.render_open();
        if self.state.is_open() {
            self.render_section();
        }
    }

    /// Close on a click outside both the panel and its toggle button.
    pub fn dismiss_click(&mut self, target: Option<&web::Node>) {
        let inside = [&self.menu, &self.button]
            .into_iter()
            .flatten()
            .any(|el| el.contains(target));
        if self.state.dismiss_outside(inside, self.handheld) {
            log::debug!("[settings] closed by outside click");
            self.render_open();
        }
    }

    pub fn show(&mut self, section: PanelSection) {
        log::debug!("[settings] showing section {}", section.name());
        self.state.show(section);
        self.render_section();
    }

    pub fn back(&mut self) {
        self.state.back();
        self.render_section();
    }

    fn render_open(&self) {
        let open = self.state.is_open();
        if let Some(menu) = &self.menu {
            set_class(menu, ACTIVE_CLASS, open);
            _ = menu.set_attribute("aria-hidden", if open { "false" } else { "true" });
        }
        if let Some(button) = &self.button {
            _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
        if self.handheld {
            if let Some(body) = self.document.body() {
                let style = body.style();
                if open {
                    _ = style.set_property("overflow", "hidden");
                } else {
                    _ = style.remove_property("overflow");
                }
            }
        }
    }

    fn render_section(&self) {
        let current = self.state.section();
        for view in query_all(&self.document, SECTION_VIEW_SELECTOR) {
            set_class(&view, ACTIVE_CLASS, false);
        }
        for section in PanelSection::ALL {
            let Some(el) = html_element(&self.document, section.element_id()) else {
                if section == current {
                    log::debug!("[settings] no element for section {}", section.name());
                }
                continue;
            };
            let shown = section == current;
            set_class(&el, ACTIVE_CLASS, shown);
            _ = el
                .style()
                .set_property("display", if shown { "block" } else { "none" });
        }
        if let Ok(Some(scroller)) = self.document.query_selector(SCROLL_CONTAINER_SELECTOR) {
            scroller.set_scroll_top(0);
        }
    }
}
