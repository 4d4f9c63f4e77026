//! One-time DOM binding and the views the core pushes updates into.

use crate::constants::*;
use crate::dom::{html_element, input_element, query_all, set_class};
use portfolio_core::effects::{ClassTarget, Effect};
use portfolio_core::{PlayerView, SettingPath, SettingValue, SettingsView, Track, VolumeIcon};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A settings input plus its optional `{id}Value` label.
#[derive(Clone)]
pub struct ControlBinding {
    pub path: SettingPath,
    pub input: web::HtmlInputElement,
    pub label: Option<web::Element>,
}

/// Every handle the page needs, looked up once.
#[derive(Clone)]
pub struct UiBindings {
    pub document: web::Document,
    pub root: web::Element,
    pub body: web::HtmlElement,
    pub audio: web::HtmlAudioElement,
    pub controls: Vec<ControlBinding>,
    player: DomPlayerView,
}

impl UiBindings {
    /// Only the `<audio>` element is mandatory; every other surface is
    /// optional and skipped when missing.
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let audio = document
            .get_element_by_id(AUDIO_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", AUDIO_ID))?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not <audio>: {:?}", AUDIO_ID, e))?;

        let controls: Vec<ControlBinding> = SettingPath::ALL
            .into_iter()
            .filter_map(|path| {
                let id = path.control_id();
                let input = input_element(document, id)?;
                let label = document.get_element_by_id(&format!("{id}Value"));
                Some(ControlBinding { path, input, label })
            })
            .collect();
        log::debug!(
            "[ui] bound {}/{} settings controls",
            controls.len(),
            SettingPath::ALL.len()
        );

        let play_button = document.get_element_by_id(PLAY_PAUSE_ID);
        let icon = |selector: &str| {
            play_button
                .as_ref()
                .and_then(|b| b.query_selector(selector).ok().flatten())
        };
        let player = DomPlayerView {
            title: document.get_element_by_id(TRACK_TITLE_ID),
            artist: document.get_element_by_id(TRACK_ARTIST_ID),
            rows: query_all(document, PLAYLIST_ROW_SELECTOR),
            progress_fill: html_element(document, PROGRESS_FILL_ID),
            elapsed: document.get_element_by_id(CURRENT_TIME_ID),
            duration: document.get_element_by_id(DURATION_ID),
            play_icon: icon(PLAY_ICON_SELECTOR),
            pause_icon: icon(PAUSE_ICON_SELECTOR),
            error_banner: document.get_element_by_id(AUDIO_ERROR_ID),
            volume_fill: html_element(document, VOLUME_FILL_ID),
            volume_slider: input_element(document, VOLUME_SLIDER_ID),
            volume_paths: query_all(document, VOLUME_ICON_PATH_SELECTOR),
        };

        Ok(Self {
            document: document.clone(),
            root,
            body,
            audio,
            controls,
            player,
        })
    }

    pub fn player_view(&self) -> DomPlayerView {
        self.player.clone()
    }

    pub fn settings_view(&self) -> DomSettingsView {
        DomSettingsView {
            document: self.document.clone(),
            root: self.root.clone(),
            root_style: self.root.dyn_ref::<web::HtmlElement>().map(|el| el.style()),
            body: self.body.clone().into(),
            controls: self.controls.clone(),
        }
    }

    /// Playlist row elements, in catalog order.
    pub fn playlist_rows(&self) -> &[web::Element] {
        &self.player.rows
    }
}

fn set_text(el: &Option<web::Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

fn set_width_percent(el: &Option<web::HtmlElement>, fraction: f64) {
    if let Some(el) = el {
        _ = el
            .style()
            .set_property("width", &format!("{}%", fraction * 100.0));
    }
}

#[derive(Clone)]
pub struct DomPlayerView {
    title: Option<web::Element>,
    artist: Option<web::Element>,
    rows: Vec<web::Element>,
    progress_fill: Option<web::HtmlElement>,
    elapsed: Option<web::Element>,
    duration: Option<web::Element>,
    play_icon: Option<web::Element>,
    pause_icon: Option<web::Element>,
    error_banner: Option<web::Element>,
    volume_fill: Option<web::HtmlElement>,
    volume_slider: Option<web::HtmlInputElement>,
    volume_paths: Vec<web::Element>,
}

impl PlayerView for DomPlayerView {
    fn set_track_info(&mut self, track: &Track) {
        set_text(&self.title, track.title);
        set_text(&self.artist, track.artist);
    }

    fn set_active_row(&mut self, index: Option<usize>) {
        for (i, row) in self.rows.iter().enumerate() {
            set_class(row, ACTIVE_CLASS, Some(i) == index);
        }
    }

    fn set_progress(&mut self, fraction: f64) {
        set_width_percent(&self.progress_fill, fraction);
    }

    fn set_elapsed(&mut self, text: &str) {
        set_text(&self.elapsed, text);
    }

    fn set_duration(&mut self, text: &str) {
        set_text(&self.duration, text);
    }

    fn set_playing(&mut self, playing: bool) {
        if let (Some(play), Some(pause)) = (&self.play_icon, &self.pause_icon) {
            set_class(play, HIDDEN_CLASS, playing);
            set_class(pause, HIDDEN_CLASS, !playing);
        }
    }

    fn show_error(&mut self, message: &str) {
        if let Some(banner) = &self.error_banner {
            banner.set_text_content(Some(message));
            set_class(banner, HIDDEN_CLASS, false);
        }
    }

    fn hide_error(&mut self) {
        if let Some(banner) = &self.error_banner {
            set_class(banner, HIDDEN_CLASS, true);
        }
    }

    fn set_volume(&mut self, volume: f64, icon: VolumeIcon) {
        set_width_percent(&self.volume_fill, volume);
        if let Some(slider) = &self.volume_slider {
            slider.set_value(&format!("{}", (volume * 100.0).round()));
        }
        let d = match icon {
            VolumeIcon::Muted => VOLUME_MUTED_PATH,
            VolumeIcon::Low => VOLUME_LOW_PATH,
            VolumeIcon::Full => VOLUME_FULL_PATH,
        };
        for path in &self.volume_paths {
            _ = path.set_attribute("d", d);
        }
    }
}

pub struct DomSettingsView {
    document: web::Document,
    root: web::Element,
    root_style: Option<web::CssStyleDeclaration>,
    body: web::Element,
    controls: Vec<ControlBinding>,
}

impl DomSettingsView {
    fn set_layer_visible(&self, selector: &str, visible: bool) {
        // decorative layers are created and removed by the page's own
        // scripts, so they are looked up on every application
        for el in query_all(&self.document, selector) {
            if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
                let style = el.style();
                if visible {
                    _ = style.remove_property("display");
                } else {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}

impl SettingsView for DomSettingsView {
    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::SetVar { name, value } => {
                if let Some(style) = &self.root_style {
                    _ = style.set_property(name, value);
                }
            }
            Effect::RemoveVar { name } => {
                if let Some(style) = &self.root_style {
                    _ = style.remove_property(name);
                }
            }
            Effect::Class { target, name, on } => {
                let el = match target {
                    ClassTarget::Root => &self.root,
                    ClassTarget::Body => &self.body,
                };
                set_class(el, name, *on);
            }
            Effect::Visible { layer, visible } => {
                self.set_layer_visible(layer.selector(), *visible);
            }
        }
    }

    fn sync_control(&mut self, path: SettingPath, value: SettingValue) {
        let Some(binding) = self.controls.iter().find(|c| c.path == path) else {
            return;
        };
        match value {
            SettingValue::Bool(on) => binding.input.set_checked(on),
            SettingValue::Int(n) => binding.input.set_value(&n.to_string()),
        }
        if let (Some(label), Some(text)) = (&binding.label, path.display_value(value)) {
            label.set_text_content(Some(&text));
        }
    }
}
