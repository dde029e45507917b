use std::sync::Once;

use kino_core::{update, Effect, LightboxView, Msg, PageState, VideoItem};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(kino_logging::initialize_for_tests);
}

fn three_videos(use_custom_player: bool) -> PageState {
    let videos = ["a", "b", "c"]
        .iter()
        .map(|name| VideoItem::new(format!("/v/{name}.webm"), *name))
        .collect();
    let (state, _) = update(
        PageState::new(),
        Msg::PageLoaded {
            rows: Vec::new(),
            videos,
        },
    );
    let (state, _) = update(state, Msg::PreferenceLoaded(use_custom_player));
    state
}

#[test]
fn first_open_creates_player_and_plays() {
    init_logging();
    let (state, effects) = update(three_videos(true), Msg::LightboxOpen(1));

    assert_eq!(
        effects,
        vec![
            Effect::CreatePlayer,
            Effect::LoadPlayer {
                src: "/v/b.webm".to_string()
            },
            Effect::PlayPlayer,
        ]
    );
    assert_eq!(state.current_index(), Some(1));
    assert!(state.player_mounted());
    assert_eq!(
        state.view().lightbox,
        Some(LightboxView {
            index: 1,
            counter: "2/3".to_string(),
            name: "b".to_string(),
            prev_visible: true,
            next_visible: true,
        })
    );
}

#[test]
fn reopening_pauses_existing_player_before_retargeting() {
    init_logging();
    let (state, _) = update(three_videos(true), Msg::LightboxOpen(0));
    let (_state, effects) = update(state, Msg::LightboxOpen(2));

    assert_eq!(
        effects,
        vec![
            Effect::PausePlayer,
            Effect::LoadPlayer {
                src: "/v/c.webm".to_string()
            },
            Effect::PlayPlayer,
        ]
    );
}

#[test]
fn out_of_range_open_leaves_state_unchanged() {
    init_logging();
    let mut state = three_videos(true);
    state.consume_dirty();
    let before = state.clone();

    let (mut state, effects) = update(state, Msg::LightboxOpen(3));
    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(state.view().lightbox.is_none());
    assert!(!state.consume_dirty());

    let (state, effects) = update(state, Msg::LightboxOpen(usize::MAX));
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn next_walks_forward_and_stops_at_the_end() {
    init_logging();
    let (state, _) = update(three_videos(true), Msg::LightboxOpen(0));
    let view = state.view().lightbox.unwrap();
    assert!(!view.prev_visible);
    assert!(view.next_visible);

    let (state, _) = update(state, Msg::LightboxNext);
    assert_eq!(state.current_index(), Some(1));
    let (state, _) = update(state, Msg::LightboxNext);
    assert_eq!(state.current_index(), Some(2));
    let view = state.view().lightbox.unwrap();
    assert_eq!(view.counter, "3/3");
    assert!(view.prev_visible);
    assert!(!view.next_visible);

    let before = state.clone();
    let (state, effects) = update(state, Msg::LightboxNext);
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn prev_at_first_item_is_noop() {
    init_logging();
    let (state, _) = update(three_videos(true), Msg::LightboxOpen(1));
    let (state, _) = update(state, Msg::LightboxPrev);
    assert_eq!(state.current_index(), Some(0));

    let before = state.clone();
    let (state, effects) = update(state, Msg::LightboxPrev);
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn navigation_without_open_lightbox_is_noop() {
    init_logging();
    for msg in [Msg::LightboxPrev, Msg::LightboxNext, Msg::LightboxClosed] {
        let (state, effects) = update(three_videos(true), msg);
        assert!(effects.is_empty());
        assert_eq!(state.current_index(), None);
    }
}

#[test]
fn close_removes_player_and_reopen_creates_one() {
    init_logging();
    let (state, _) = update(three_videos(true), Msg::LightboxOpen(2));
    let (state, effects) = update(state, Msg::LightboxClosed);

    assert_eq!(effects, vec![Effect::RemovePlayer]);
    assert!(!state.player_mounted());
    assert_eq!(state.current_index(), None);
    assert!(state.view().lightbox.is_none());

    let (state, effects) = update(state, Msg::LightboxOpen(0));
    let creates = effects
        .iter()
        .filter(|effect| **effect == Effect::CreatePlayer)
        .count();
    assert_eq!(creates, 1);
    assert!(!effects.contains(&Effect::PausePlayer));
    assert!(state.player_mounted());
}

#[test]
fn single_video_hides_both_nav_controls() {
    init_logging();
    let (state, _) = update(
        PageState::new(),
        Msg::PageLoaded {
            rows: Vec::new(),
            videos: vec![VideoItem::new("/only.webm", "only")],
        },
    );
    let (state, _) = update(state, Msg::LightboxOpen(0));
    let view = state.view().lightbox.unwrap();
    assert_eq!(view.counter, "1/1");
    assert!(!view.prev_visible);
    assert!(!view.next_visible);
}

#[test]
fn reload_with_open_lightbox_removes_the_player() {
    init_logging();
    let (state, _) = update(three_videos(true), Msg::LightboxOpen(1));
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            rows: Vec::new(),
            videos: vec![VideoItem::new("/v/a.webm", "a")],
        },
    );

    assert_eq!(effects, vec![Effect::RemovePlayer]);
    assert!(!state.player_mounted());
    assert!(state.view().lightbox.is_none());

    let (_state, effects) = update(state, Msg::LightboxOpen(0));
    assert_eq!(effects[0], Effect::CreatePlayer);
}

#[test]
fn reload_with_closed_lightbox_emits_nothing() {
    init_logging();
    let (_state, effects) = update(
        three_videos(true),
        Msg::PageLoaded {
            rows: Vec::new(),
            videos: Vec::new(),
        },
    );
    assert!(effects.is_empty());
}
