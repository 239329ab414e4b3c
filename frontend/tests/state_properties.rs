//! Property tests for the page's state machines.

use proptest::prelude::*;

use wilderland::state::carousel::{CarouselError, CarouselIndex};
use wilderland::state::email::EmailField;
use wilderland::state::playback::{MediaError, MediaKind, PlaybackRequest, PlaybackState};
use wilderland::state::visibility::VisibilityLatch;

/// Carousel length plus a valid start index.
fn carousel_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1usize..50).prop_flat_map(|len| (Just(len), 0..len))
}

fn positioned(len: usize, start: usize) -> CarouselIndex {
    let mut carousel = CarouselIndex::new(len).unwrap();
    carousel.select(start).unwrap();
    carousel
}

proptest! {
    /// Stepping forward a full lap lands on the start
    #[test]
    fn next_full_lap_returns((len, start) in carousel_strategy()) {
        let mut carousel = positioned(len, start);
        for _ in 0..len {
            carousel.next();
        }
        prop_assert_eq!(carousel.current(), start);
    }

    /// Stepping backward a full lap lands on the start
    #[test]
    fn previous_full_lap_returns((len, start) in carousel_strategy()) {
        let mut carousel = positioned(len, start);
        for _ in 0..len {
            carousel.previous();
        }
        prop_assert_eq!(carousel.current(), start);
    }

    /// next and previous undo each other
    #[test]
    fn next_previous_inverse((len, start) in carousel_strategy()) {
        let mut carousel = positioned(len, start);
        carousel.next();
        carousel.previous();
        prop_assert_eq!(carousel.current(), start);

        carousel.previous();
        carousel.next();
        prop_assert_eq!(carousel.current(), start);
    }

    /// select lands exactly where asked, or refuses and stays put
    #[test]
    fn select_is_exact_or_rejected(
        (len, start) in carousel_strategy(),
        target in 0usize..100,
    ) {
        let mut carousel = positioned(len, start);
        let result = carousel.select(target);
        if target < len {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(carousel.current(), target);
        } else {
            prop_assert_eq!(result, Err(CarouselError::InvalidIndex { index: target, len }));
            prop_assert_eq!(carousel.current(), start);
        }
    }

    /// Index never escapes the list whatever the step sequence
    #[test]
    fn index_stays_in_range(
        len in 1usize..20,
        steps in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        let mut carousel = CarouselIndex::new(len).unwrap();
        for forward in steps {
            if forward { carousel.next() } else { carousel.previous() }
            prop_assert!(carousel.current() < len);
        }
    }

    /// Once shown, the latch never goes back
    #[test]
    fn latch_is_monotonic(
        threshold in 0.0f64..=1.0,
        events in prop::collection::vec((any::<bool>(), 0.0f64..=1.0), 0..32),
    ) {
        let mut latch = VisibilityLatch::new(threshold);
        let mut seen = false;
        for (intersecting, ratio) in events {
            latch.observe(intersecting, ratio);
            seen |= intersecting && ratio >= threshold;
            prop_assert_eq!(latch.is_shown(), seen);
        }
    }

    /// Whatever was typed, submit hands it over and empties the field
    #[test]
    fn submit_clears_field(value in ".*") {
        let mut field = EmailField::default();
        field.on_change(value.clone());
        prop_assert_eq!(field.take_for_submit(), value);
        prop_assert_eq!(field.value(), "");
    }

    /// Double mute toggle is the identity
    #[test]
    fn double_mute_is_identity(playing in any::<bool>()) {
        let mut state = PlaybackState::new(MediaKind::Video);
        if playing {
            state.request_toggle();
            state.resolve(PlaybackRequest::Play, Ok(()));
        }
        let before = state.is_muted();
        state.toggle_mute();
        state.toggle_mute();
        prop_assert_eq!(state.is_muted(), before);
    }

    /// A failed request never changes the playing flag
    #[test]
    fn failed_request_keeps_flag(start_playing in any::<bool>(), audio in any::<bool>()) {
        let kind = if audio { MediaKind::AmbientAudio } else { MediaKind::Video };
        let mut state = PlaybackState::new(kind);
        if start_playing {
            state.request_toggle();
            state.resolve(PlaybackRequest::Play, Ok(()));
        }
        let request = state.request_toggle().unwrap();
        state.resolve(request, Err(MediaError::Rejected("blocked".into())));
        prop_assert_eq!(state.is_playing(), start_playing);
        prop_assert_eq!(state.pending(), None);
    }
}

#[test]
fn three_character_walk() {
    let mut carousel = CarouselIndex::new(3).unwrap();
    carousel.next();
    assert_eq!(carousel.current(), 1);
    carousel.next();
    assert_eq!(carousel.current(), 2);
    carousel.next();
    assert_eq!(carousel.current(), 0);
    carousel.previous();
    assert_eq!(carousel.current(), 2);
}

#[test]
fn paused_video_mute_round_trip() {
    let mut state = PlaybackState::new(MediaKind::Video);
    assert!(!state.is_playing());
    assert!(state.is_muted());
    state.toggle_mute();
    assert!(!state.is_muted());
    state.toggle_mute();
    assert!(state.is_muted());
}
