// Test doubles shared by the integration tests.

#![allow(dead_code)]

use portfolio_core::effects::{ClassTarget, Decoration, Effect};
use portfolio_core::player::{MediaHandle, PlayTicket, PlayerView, VolumeIcon};
use portfolio_core::settings::{SettingPath, SettingValue};
use portfolio_core::store::SettingsView;
use portfolio_core::Track;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Resulting page state after a run of effects, so repeated application can
/// be compared against a single one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub vars: HashMap<&'static str, String>,
    pub classes: HashMap<(ClassTarget, &'static str), bool>,
    pub layers: HashMap<Decoration, bool>,
    pub controls: HashMap<SettingPath, SettingValue>,
}

#[derive(Debug, Default)]
pub struct RecordingSettingsView {
    pub page: PageState,
    pub effects_applied: usize,
}

impl RecordingSettingsView {
    pub fn var(&self, name: &str) -> Option<&str> {
        self.page.vars.get(name).map(String::as_str)
    }

    pub fn class_on(&self, target: ClassTarget, name: &str) -> bool {
        self.page
            .classes
            .iter()
            .any(|((t, n), on)| *t == target && *n == name && *on)
    }

    pub fn layer_visible(&self, layer: Decoration) -> Option<bool> {
        self.page.layers.get(&layer).copied()
    }
}

impl SettingsView for RecordingSettingsView {
    fn apply(&mut self, effect: &Effect) {
        self.effects_applied += 1;
        match effect {
            Effect::SetVar { name, value } => {
                self.page.vars.insert(*name, value.clone());
            }
            Effect::RemoveVar { name } => {
                self.page.vars.remove(name);
            }
            Effect::Class { target, name, on } => {
                self.page.classes.insert((*target, *name), *on);
            }
            Effect::Visible { layer, visible } => {
                self.page.layers.insert(*layer, *visible);
            }
        }
    }

    fn sync_control(&mut self, path: SettingPath, value: SettingValue) {
        self.page.controls.insert(path, value);
    }
}

#[derive(Debug, Default)]
pub struct MediaState {
    pub source: Option<String>,
    pub loads: usize,
    pub play_requests: Vec<PlayTicket>,
    pub pauses: usize,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
}

/// Media handle whose state the test keeps a handle on.
#[derive(Clone, Debug)]
pub struct FakeMedia {
    pub state: Rc<RefCell<MediaState>>,
}

impl FakeMedia {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MediaState {
                duration: f64::NAN,
                ..MediaState::default()
            })),
        }
    }

    pub fn set_timing(&self, current_time: f64, duration: f64) {
        let mut s = self.state.borrow_mut();
        s.current_time = current_time;
        s.duration = duration;
    }
}

impl MediaHandle for FakeMedia {
    fn set_source(&mut self, uri: &str) {
        let mut s = self.state.borrow_mut();
        s.source = Some(uri.to_string());
        s.current_time = 0.0;
        s.duration = f64::NAN;
    }

    fn load(&mut self) {
        self.state.borrow_mut().loads += 1;
    }

    fn play(&mut self, ticket: PlayTicket) {
        self.state.borrow_mut().play_requests.push(ticket);
    }

    fn pause(&mut self) {
        self.state.borrow_mut().pauses += 1;
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.state.borrow_mut().current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.state.borrow().duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.state.borrow_mut().volume = volume;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordingPlayerView {
    pub title: String,
    pub artist: String,
    pub active_row: Option<usize>,
    pub progress: f64,
    pub elapsed: String,
    pub duration: String,
    pub playing: bool,
    pub error: Option<String>,
    pub volume: f64,
    pub icon: Option<VolumeIcon>,
}

impl Default for RecordingPlayerView {
    fn default() -> Self {
        Self {
            title: "Select a track".to_string(),
            artist: String::new(),
            active_row: None,
            progress: 0.0,
            elapsed: "0:00".to_string(),
            duration: "0:00".to_string(),
            playing: false,
            error: None,
            volume: 0.0,
            icon: None,
        }
    }
}

impl PlayerView for RecordingPlayerView {
    fn set_track_info(&mut self, track: &Track) {
        self.title = track.title.to_string();
        self.artist = track.artist.to_string();
    }

    fn set_active_row(&mut self, index: Option<usize>) {
        self.active_row = index;
    }

    fn set_progress(&mut self, fraction: f64) {
        self.progress = fraction;
    }

    fn set_elapsed(&mut self, text: &str) {
        self.elapsed = text.to_string();
    }

    fn set_duration(&mut self, text: &str) {
        self.duration = text.to_string();
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn set_volume(&mut self, volume: f64, icon: VolumeIcon) {
        self.volume = volume;
        self.icon = Some(icon);
    }
}
