// Playlist controller driven through a fake media handle.

mod common;

use common::{init_logger, FakeMedia, RecordingPlayerView};
use instant::Instant;
use portfolio_core::player::{
    PlayError, PlaybackPhase, PlaylistController, VolumeIcon, PLAY_FAILED_MESSAGE,
};
use portfolio_core::default_catalog;
use std::time::Duration;

type Player = PlaylistController<FakeMedia, RecordingPlayerView>;

fn player() -> (Player, FakeMedia) {
    init_logger();
    let media = FakeMedia::new();
    let p = PlaylistController::new(
        default_catalog(),
        media.clone(),
        RecordingPlayerView::default(),
    );
    (p, media)
}

/// Resolve whatever play request is outstanding.
fn resolve(p: &mut Player) {
    let ticket = p.pending_play().expect("a pending play request");
    p.play_settled(ticket, Ok(()));
}

fn playing_at(index: usize) -> (Player, FakeMedia) {
    let (mut p, media) = player();
    assert!(p.load_track(index));
    p.play();
    resolve(&mut p);
    assert_eq!(p.phase(), PlaybackPhase::Playing);
    (p, media)
}

#[test]
fn starts_empty_with_default_volume() {
    let (p, media) = player();
    assert_eq!(p.phase(), PlaybackPhase::Empty);
    assert_eq!(p.current_index(), None);
    assert!(!p.is_playing());
    assert_eq!(media.state.borrow().volume, 0.7);
    assert_eq!(p.view().icon, Some(VolumeIcon::Full));
}

#[test]
fn load_track_resets_the_display() {
    let (mut p, media) = player();
    assert!(p.load_track(1));
    assert_eq!(p.phase(), PlaybackPhase::Loading);
    let v = p.view();
    assert_eq!(v.title, "Limerence");
    assert_eq!(v.artist, "Lucki");
    assert_eq!(v.active_row, Some(1));
    assert_eq!(v.progress, 0.0);
    assert_eq!(v.elapsed, "0:00");
    assert_eq!(v.duration, "0:00");
    assert_eq!(
        media.state.borrow().source.as_deref(),
        Some("./music/limerenceLucki.mp3")
    );
    assert_eq!(media.state.borrow().loads, 1);
}

#[test]
fn metadata_moves_loading_to_paused() {
    let (mut p, media) = player();
    p.load_track(0);
    media.set_timing(0.0, 189.0);
    p.on_metadata_ready();
    assert_eq!(p.phase(), PlaybackPhase::Paused);
    assert_eq!(p.view().duration, "3:09");
}

#[test]
fn unknown_duration_reads_zero() {
    let (mut p, _media) = player();
    p.load_track(0);
    p.on_metadata_ready();
    assert_eq!(p.view().duration, "0:00");
}

#[test]
fn out_of_range_load_is_a_no_op() {
    let (mut p, media) = playing_at(2);
    let before = p.view().clone();
    let loads = media.state.borrow().loads;

    assert!(!p.load_track(99));
    assert_eq!(p.current_index(), Some(2));
    assert_eq!(p.phase(), PlaybackPhase::Playing);
    assert_eq!(p.view(), &before);
    assert_eq!(media.state.borrow().loads, loads);
}

#[test]
fn skipping_wraps_around_the_catalog() {
    let (mut p, _media) = player();
    p.load_track(2);
    p.next_track();
    assert_eq!(p.current_index(), Some(0));
    p.prev_track();
    assert_eq!(p.current_index(), Some(2));
    // paused skips stay paused
    assert_eq!(p.pending_play(), None);
    assert!(!p.view().playing);
}

#[test]
fn skipping_from_empty() {
    let (mut p, _media) = player();
    p.prev_track();
    assert_eq!(p.current_index(), Some(2));

    let (mut p, _media) = player();
    p.next_track();
    assert_eq!(p.current_index(), Some(0));
}

#[test]
fn skipping_while_playing_keeps_playing() {
    let (mut p, media) = playing_at(0);
    p.next_track();
    assert_eq!(p.current_index(), Some(1));
    assert!(p.pending_play().is_some());
    resolve(&mut p);
    assert!(p.is_playing());
    assert_eq!(media.state.borrow().play_requests.len(), 2);
}

#[test]
fn track_end_advances_and_keeps_playing() {
    let (mut p, media) = playing_at(0);
    media.set_timing(150.0, 189.0);
    p.on_time_update(Instant::now());
    assert!(p.view().progress > 0.7);

    p.on_ended();
    assert_eq!(p.current_index(), Some(1));
    resolve(&mut p);
    assert_eq!(p.phase(), PlaybackPhase::Playing);
    let v = p.view();
    assert_eq!(v.title, "Limerence");
    assert_eq!(v.artist, "Lucki");
    assert_eq!(v.progress, 0.0);
    assert!(v.playing);
}

#[test]
fn last_track_end_wraps_to_first() {
    let (mut p, _media) = playing_at(2);
    p.on_ended();
    assert_eq!(p.current_index(), Some(0));
    assert!(p.pending_play().is_some());
}

#[test]
fn rejected_play_shows_an_error() {
    let (mut p, _media) = player();
    p.load_track(0);
    let ticket = p.play().unwrap();
    p.play_settled(ticket, Err(PlayError::NotAllowed("gesture required".into())));

    assert!(!p.is_playing());
    assert!(!p.view().playing);
    let banner = p.view().error.clone().unwrap_or_default();
    assert!(!banner.is_empty());
    assert_eq!(banner, PLAY_FAILED_MESSAGE);
    assert_eq!(p.error_message(), Some(PLAY_FAILED_MESSAGE));
}

#[test]
fn rejection_while_loading_waits_for_metadata() {
    let (mut p, media) = player();
    p.load_track(0);
    let ticket = p.play().unwrap();
    p.play_settled(ticket, Err(PlayError::Rejected("no source yet".into())));
    assert_eq!(p.phase(), PlaybackPhase::Loading);
    assert_eq!(p.pending_play(), None);

    media.set_timing(0.0, 189.0);
    p.on_metadata_ready();
    assert_eq!(p.phase(), PlaybackPhase::Paused);
    assert_eq!(p.view().duration, "3:09");
}

#[test]
fn toggle_resumes_after_an_outside_pause() {
    let (mut p, media) = playing_at(0);
    assert_eq!(media.state.borrow().play_requests.len(), 1);

    p.on_media_paused();
    assert_eq!(p.phase(), PlaybackPhase::Paused);
    assert!(!p.view().playing);

    p.toggle_play_pause();
    assert_eq!(media.state.borrow().play_requests.len(), 2);
    assert!(p.pending_play().is_some());
    resolve(&mut p);
    assert!(p.is_playing());
}

#[test]
fn outside_play_marks_the_player_playing() {
    let (mut p, media) = playing_at(1);
    p.pause();
    p.on_media_playing();
    assert!(p.is_playing());
    assert!(p.view().playing);
    assert_eq!(media.state.borrow().play_requests.len(), 1);

    // the next toggle pauses instead of issuing another play
    p.toggle_play_pause();
    assert_eq!(p.phase(), PlaybackPhase::Paused);
    assert_eq!(media.state.borrow().play_requests.len(), 1);
}

#[test]
fn element_events_during_a_pending_play_are_ignored() {
    let (mut p, _media) = player();
    p.on_media_playing();
    assert_eq!(p.phase(), PlaybackPhase::Empty);

    p.load_track(0);
    let ticket = p.play().unwrap();
    p.on_media_playing();
    p.on_media_paused();
    assert_eq!(p.pending_play(), Some(ticket));
    assert!(!p.is_playing());

    p.play_settled(ticket, Ok(()));
    assert!(p.is_playing());
}

#[test]
fn late_resolve_after_pause_is_ignored() {
    let (mut p, _media) = player();
    p.load_track(0);
    let ticket = p.play().unwrap();
    p.pause();
    p.play_settled(ticket, Ok(()));
    assert!(!p.is_playing());
    assert!(!p.view().playing);
}

#[test]
fn late_rejection_after_track_change_is_ignored() {
    let (mut p, _media) = player();
    p.load_track(0);
    let first = p.play().unwrap();
    p.next_track();
    let second = p.pending_play().unwrap();
    assert_ne!(first, second);

    p.play_settled(first, Err(PlayError::Rejected("aborted".into())));
    assert_eq!(p.view().error, None);

    p.play_settled(second, Ok(()));
    assert!(p.is_playing());
    assert_eq!(p.current_index(), Some(1));
}

#[test]
fn repeated_play_reuses_the_pending_request() {
    let (mut p, media) = player();
    p.load_track(0);
    let a = p.play();
    let b = p.play();
    assert_eq!(a, b);
    assert_eq!(media.state.borrow().play_requests.len(), 1);
}

#[test]
fn toggle_from_empty_starts_the_first_track() {
    let (mut p, _media) = player();
    p.toggle_play_pause();
    assert_eq!(p.current_index(), Some(0));
    assert!(p.pending_play().is_some());
    resolve(&mut p);
    assert!(p.is_playing());

    p.toggle_play_pause();
    assert_eq!(p.phase(), PlaybackPhase::Paused);
    assert!(!p.view().playing);
}

#[test]
fn media_errors_are_classified() {
    let (mut p, _media) = playing_at(0);
    p.on_error(Some(2));
    assert_eq!(p.phase(), PlaybackPhase::Errored);
    assert!(!p.is_playing());
    assert_eq!(
        p.view().error.as_deref(),
        Some("Audio file could not be loaded. Network error occurred.")
    );

    // loading another track clears the banner
    p.load_track(1);
    assert_eq!(p.phase(), PlaybackPhase::Loading);
    assert_eq!(p.view().error, None);
}

#[test]
fn can_play_hides_the_banner() {
    let (mut p, _media) = player();
    p.load_track(0);
    p.on_error(Some(4));
    assert!(p.view().error.is_some());
    p.on_can_play();
    assert_eq!(p.view().error, None);
    assert_eq!(p.phase(), PlaybackPhase::Paused);
}

#[test]
fn seek_needs_a_known_duration() {
    let (mut p, media) = player();
    p.load_track(0);
    assert!(!p.seek(0.5));
    assert_eq!(media.state.borrow().current_time, 0.0);

    media.set_timing(0.0, 200.0);
    assert!(p.seek(0.25));
    assert_eq!(media.state.borrow().current_time, 50.0);
    assert_eq!(p.view().elapsed, "0:50");

    assert!(p.seek(3.0));
    assert_eq!(media.state.borrow().current_time, 200.0);
    assert!(p.seek(-1.0));
    assert_eq!(media.state.borrow().current_time, 0.0);
}

#[test]
fn volume_icon_follows_thresholds() {
    let (mut p, media) = player();
    p.set_volume(0.0);
    assert_eq!(p.view().icon, Some(VolumeIcon::Muted));
    p.set_volume(40.0);
    assert_eq!(p.view().icon, Some(VolumeIcon::Low));
    assert_eq!(media.state.borrow().volume, 0.4);
    p.set_volume(80.0);
    assert_eq!(p.view().icon, Some(VolumeIcon::Full));
    p.set_volume(250.0);
    assert_eq!(p.volume(), 1.0);
    p.set_volume(-5.0);
    assert_eq!(p.volume(), 0.0);
}

#[test]
fn time_updates_are_throttled() {
    let (mut p, media) = playing_at(0);
    let t0 = Instant::now();
    media.set_timing(10.0, 100.0);
    p.on_time_update(t0);
    assert_eq!(p.view().elapsed, "0:10");

    media.set_timing(11.0, 100.0);
    p.on_time_update(t0 + Duration::from_millis(30));
    assert_eq!(p.view().elapsed, "0:10");

    p.on_time_update(t0 + Duration::from_millis(120));
    assert_eq!(p.view().elapsed, "0:11");
    assert!((p.view().progress - 0.11).abs() < 1e-9);
}

#[test]
fn hidden_page_pauses_playback() {
    let (mut p, media) = playing_at(1);
    p.on_visibility_hidden();
    assert!(!p.is_playing());
    assert!(media.state.borrow().pauses >= 1);
}

#[test]
fn autoplay_only_starts_once_and_when_enabled() {
    let (mut p, _media) = player();
    assert!(!p.autoplay(false));
    assert_eq!(p.phase(), PlaybackPhase::Empty);

    assert!(p.autoplay(true));
    assert_eq!(p.current_index(), Some(0));
    resolve(&mut p);
    assert!(!p.autoplay(true));
}

#[test]
fn row_click_loads_and_plays() {
    let (mut p, _media) = player();
    p.select_track(2);
    assert_eq!(p.current_index(), Some(2));
    assert_eq!(p.view().title, "Go Hard 2.0");
    assert!(p.pending_play().is_some());
}
