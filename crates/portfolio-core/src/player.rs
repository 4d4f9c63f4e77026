//! Playlist controller: a small state machine over one media handle.
//!
//! The controller never touches the page directly. Commands go to a
//! [`MediaHandle`], UI updates go to a [`PlayerView`], and media events are fed
//! back in through the `on_*` methods. Play requests are asynchronous: each one
//! carries a [`PlayTicket`] and its settlement is only honoured while that
//! ticket is still the pending one, so a late resolve after a pause or a track
//! change is dropped instead of flipping the UI back to "playing".

use crate::catalog::{Catalog, Track};
use crate::constants::{DEFAULT_VOLUME, TIME_UPDATE_INTERVAL_MS, VOLUME_LOW_THRESHOLD};
use crate::format::format_time;
use crate::throttle::Throttle;
use instant::Instant;
use std::time::Duration;
use thiserror::Error;

/// Shown when a play request is rejected.
pub const PLAY_FAILED_MESSAGE: &str = "Playback failed. Please check if the audio file exists.";

const LOAD_FAILED_PREFIX: &str = "Audio file could not be loaded. ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Nothing loaded yet.
    Empty,
    /// Source assigned, metadata not ready.
    Loading,
    Paused,
    Playing,
    Errored,
}

/// Identifies one play request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayTicket(u64);

impl PlayTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Autoplay policy refused playback without a user gesture.
    #[error("playback not allowed: {0}")]
    NotAllowed(String),
    #[error("play request rejected: {0}")]
    Rejected(String),
}

/// Classification of a media element error (`MediaError.code`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaErrorKind {
    Aborted,
    Network,
    Decode,
    SourceNotSupported,
    Unknown,
}

impl MediaErrorKind {
    pub fn from_code(code: Option<u16>) -> Self {
        match code {
            Some(1) => MediaErrorKind::Aborted,
            Some(2) => MediaErrorKind::Network,
            Some(3) => MediaErrorKind::Decode,
            Some(4) => MediaErrorKind::SourceNotSupported,
            _ => MediaErrorKind::Unknown,
        }
    }

    pub fn message(self) -> String {
        let detail = match self {
            MediaErrorKind::Aborted => "Playback was aborted.",
            MediaErrorKind::Network => "Network error occurred.",
            MediaErrorKind::Decode => "Audio file format not supported.",
            MediaErrorKind::SourceNotSupported => "Audio file not found or format not supported.",
            MediaErrorKind::Unknown => "Unknown error occurred.",
        };
        format!("{LOAD_FAILED_PREFIX}{detail}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    Full,
}

impl VolumeIcon {
    pub fn for_level(volume: f64) -> Self {
        if volume <= 0.0 {
            VolumeIcon::Muted
        } else if volume < VOLUME_LOW_THRESHOLD {
            VolumeIcon::Low
        } else {
            VolumeIcon::Full
        }
    }
}

/// The playback primitive the controller drives exclusively.
pub trait MediaHandle {
    fn set_source(&mut self, uri: &str);
    fn load(&mut self);
    /// Start playback. The outcome must be reported back through
    /// [`PlaylistController::play_settled`] with the same ticket.
    fn play(&mut self, ticket: PlayTicket);
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// NaN or infinite while unknown.
    fn duration(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
}

/// Player surfaces on the page.
pub trait PlayerView {
    fn set_track_info(&mut self, track: &Track);
    fn set_active_row(&mut self, index: Option<usize>);
    /// Progress fill, 0.0..=1.0.
    fn set_progress(&mut self, fraction: f64);
    fn set_elapsed(&mut self, text: &str);
    fn set_duration(&mut self, text: &str);
    fn set_playing(&mut self, playing: bool);
    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);
    fn set_volume(&mut self, volume: f64, icon: VolumeIcon);
}

pub struct PlaylistController<M, V> {
    catalog: Catalog,
    media: M,
    view: V,
    phase: PlaybackPhase,
    current: Option<usize>,
    pending: Option<PlayTicket>,
    next_ticket: u64,
    volume: f64,
    error: Option<String>,
    progress: Throttle,
}

impl<M: MediaHandle, V: PlayerView> PlaylistController<M, V> {
    pub fn new(catalog: Catalog, media: M, view: V) -> Self {
        let mut player = Self {
            catalog,
            media,
            view,
            phase: PlaybackPhase::Empty,
            current: None,
            pending: None,
            next_ticket: 0,
            volume: DEFAULT_VOLUME,
            error: None,
            progress: Throttle::new(Duration::from_millis(TIME_UPDATE_INTERVAL_MS)),
        };
        player.push_volume();
        player.view.set_playing(false);
        player
    }

    // ---------------- State ----------------

    #[inline]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// The play request still awaiting settlement, if any.
    #[inline]
    pub fn pending_play(&self) -> Option<PlayTicket> {
        self.pending
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // playing, or about to be
    fn wants_playback(&self) -> bool {
        self.is_playing() || self.pending.is_some()
    }

    // ---------------- Commands ----------------

    /// Load track `index`. Out-of-range indices are ignored and return false.
    /// Supersedes any in-flight play request.
    pub fn load_track(&mut self, index: usize) -> bool {
        let Some(track) = self.catalog.get(index).cloned() else {
            log::debug!("[player] ignoring load of track {}", index);
            return false;
        };
        self.pending = None;
        self.current = Some(index);
        self.phase = PlaybackPhase::Loading;
        self.progress.reset();
        self.clear_error();

        self.media.set_source(track.source);
        self.media.load();

        self.view.set_track_info(&track);
        self.view.set_active_row(Some(index));
        self.view.set_progress(0.0);
        self.view.set_elapsed("0:00");
        self.view.set_duration("0:00");
        self.view.set_playing(false);
        log::info!("[player] loaded '{}' by {}", track.title, track.artist);
        true
    }

    /// Ask the media handle to play. From `Empty` the first track is loaded
    /// first. Returns the ticket of the pending request.
    pub fn play(&mut self) -> Option<PlayTicket> {
        if self.current.is_none() && !self.load_track(0) {
            return None;
        }
        if self.is_playing() {
            return None;
        }
        if let Some(ticket) = self.pending {
            return Some(ticket);
        }
        let ticket = PlayTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.media.play(ticket);
        Some(ticket)
    }

    /// Outcome of the play request identified by `ticket`.
    pub fn play_settled(&mut self, ticket: PlayTicket, result: Result<(), PlayError>) {
        if self.pending != Some(ticket) {
            log::debug!("[player] dropping stale play result #{}", ticket.id());
            return;
        }
        self.pending = None;
        match result {
            Ok(()) => {
                self.phase = PlaybackPhase::Playing;
                self.view.set_playing(true);
            }
            Err(e) => {
                // the phase is whatever preceded the request: Loading until
                // metadata arrives, Paused or Errored otherwise
                log::warn!("[player] {}", e);
                self.view.set_playing(false);
                self.show_error(PLAY_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn pause(&mut self) {
        self.pending = None;
        self.media.pause();
        if self.phase == PlaybackPhase::Playing {
            self.phase = PlaybackPhase::Paused;
        }
        self.view.set_playing(false);
    }

    /// Play/pause button. Nothing loaded starts the first track.
    pub fn toggle_play_pause(&mut self) {
        if self.current.is_some() && self.wants_playback() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Playlist row click: load and play.
    pub fn select_track(&mut self, index: usize) {
        if self.load_track(index) {
            self.play();
        }
    }

    pub fn next_track(&mut self) {
        let index = self.catalog.next_index(self.current);
        self.skip_to(index);
    }

    pub fn prev_track(&mut self) {
        let index = self.catalog.prev_index(self.current);
        self.skip_to(index);
    }

    fn skip_to(&mut self, index: usize) {
        let resume = self.wants_playback();
        if self.load_track(index) && resume {
            self.play();
        }
    }

    /// Jump to `fraction` of the track. Ignored until the duration is known.
    pub fn seek(&mut self, fraction: f64) -> bool {
        let duration = self.media.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return false;
        }
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let seconds = fraction * duration;
        self.media.set_current_time(seconds);
        self.view.set_progress(fraction);
        self.view.set_elapsed(&format_time(seconds));
        true
    }

    /// Volume from a 0..=100 slider.
    pub fn set_volume(&mut self, percent: f64) {
        let volume = if percent.is_nan() {
            0.0
        } else {
            (percent / 100.0).clamp(0.0, 1.0)
        };
        self.volume = volume;
        self.push_volume();
    }

    fn push_volume(&mut self) {
        self.media.set_volume(self.volume);
        self.view
            .set_volume(self.volume, VolumeIcon::for_level(self.volume));
    }

    /// Start the first track on the first user interaction when autoplay is
    /// enabled and nothing has been loaded yet.
    pub fn autoplay(&mut self, enabled: bool) -> bool {
        if !enabled || self.current.is_some() {
            return false;
        }
        log::info!("[player] autoplay");
        self.load_track(0) && self.play().is_some()
    }

    // ---------------- Media events ----------------

    pub fn on_metadata_ready(&mut self) {
        self.view.set_duration(&format_time(self.media.duration()));
        if self.phase == PlaybackPhase::Loading {
            self.phase = PlaybackPhase::Paused;
        }
    }

    /// `timeupdate`; redraws at most once per throttle interval.
    pub fn on_time_update(&mut self, now: Instant) {
        if self.progress.ready(now) {
            self.refresh_progress();
        }
    }

    fn refresh_progress(&mut self) {
        let duration = self.media.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        let elapsed = self.media.current_time();
        self.view.set_progress((elapsed / duration).clamp(0.0, 1.0));
        self.view.set_elapsed(&format_time(elapsed));
    }

    /// Playback reached the end: advance, wrapping, and keep playing.
    pub fn on_ended(&mut self) {
        let resume = self.wants_playback();
        let index = self.catalog.next_index(self.current);
        if self.load_track(index) && resume {
            self.play();
        }
    }

    pub fn on_error(&mut self, code: Option<u16>) {
        let kind = MediaErrorKind::from_code(code);
        log::warn!("[player] media error {:?} (code {:?})", kind, code);
        self.pending = None;
        self.phase = PlaybackPhase::Errored;
        self.view.set_playing(false);
        self.show_error(kind.message());
    }

    pub fn on_can_play(&mut self) {
        if self.phase == PlaybackPhase::Errored {
            self.phase = PlaybackPhase::Paused;
        }
        self.clear_error();
    }

    /// The element started playing on its own (media keys, OS controls).
    /// Requests we issued are settled through `play_settled` instead.
    pub fn on_media_playing(&mut self) {
        if self.pending.is_some() || self.current.is_none() || self.is_playing() {
            return;
        }
        self.phase = PlaybackPhase::Playing;
        self.clear_error();
        self.view.set_playing(true);
    }

    /// The element paused without a `pause()` from us. Callers skip the
    /// pause that precedes `ended`.
    pub fn on_media_paused(&mut self) {
        if self.pending.is_some() || !self.is_playing() {
            return;
        }
        log::debug!("[player] paused by the browser");
        self.phase = PlaybackPhase::Paused;
        self.view.set_playing(false);
    }

    /// Tab hidden: stop playing.
    pub fn on_visibility_hidden(&mut self) {
        if self.wants_playback() {
            self.pause();
        }
    }

    fn show_error(&mut self, message: String) {
        self.view.show_error(&message);
        self.error = Some(message);
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.view.hide_error();
    }
}
