use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("media element is not mounted")]
    Unavailable,
    #[error("play request rejected: {0}")]
    Rejected(String),
    #[error("media element error: {0}")]
    Element(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    /// Background theme track. Audible exactly while playing and restarted by
    /// hand when it ends.
    AmbientAudio,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackRequest {
    Play,
    Pause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndedAction {
    Stop,
    /// Rewind to zero and issue a fresh play request.
    Restart,
}

/// Playback flags for one media element.
///
/// Play and pause are request/result pairs: `begin` records the request and
/// `resolve` commits `is_playing` once the element has answered. While a
/// request is pending further toggles are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    kind: MediaKind,
    is_playing: bool,
    is_muted: bool,
    pending: Option<PlaybackRequest>,
}

impl PlaybackState {
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            is_playing: false,
            is_muted: true,
            pending: None,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn pending(&self) -> Option<PlaybackRequest> {
        self.pending
    }

    /// The request a toggle would issue right now, if any.
    pub fn next_request(&self) -> Option<PlaybackRequest> {
        if self.pending.is_some() {
            return None;
        }
        Some(if self.is_playing {
            PlaybackRequest::Pause
        } else {
            PlaybackRequest::Play
        })
    }

    /// Records an outgoing request. Returns false and leaves the state alone
    /// while another request is still pending.
    pub fn begin(&mut self, request: PlaybackRequest) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(request);
        true
    }

    pub fn request_toggle(&mut self) -> Option<PlaybackRequest> {
        let request = self.next_request()?;
        self.begin(request);
        Some(request)
    }

    /// Commits the outcome of the outstanding request. Answers to requests
    /// that were dropped by `stop` or an end of playback are ignored.
    pub fn resolve(&mut self, request: PlaybackRequest, outcome: Result<(), MediaError>) {
        if self.pending != Some(request) {
            return;
        }
        self.pending = None;
        if outcome.is_err() {
            return;
        }
        self.is_playing = request == PlaybackRequest::Play;
        if self.kind == MediaKind::AmbientAudio {
            self.is_muted = !self.is_playing;
        }
    }

    /// Flips the muted flag and returns the value to push onto the element.
    pub fn toggle_mute(&mut self) -> bool {
        self.is_muted = !self.is_muted;
        self.is_muted
    }

    /// What reaching the end of the media means for this element.
    pub fn ended_action(&self) -> EndedAction {
        if self.kind == MediaKind::AmbientAudio && self.is_playing {
            EndedAction::Restart
        } else {
            EndedAction::Stop
        }
    }

    /// Applies a decision taken by `ended_action`.
    pub fn finish(&mut self, action: EndedAction) {
        self.is_playing = false;
        self.pending = match action {
            EndedAction::Restart => Some(PlaybackRequest::Play),
            EndedAction::Stop => None,
        };
    }

    /// Forced pause from outside the toggle, e.g. closing the trailer modal.
    pub fn stop(&mut self) {
        self.is_playing = false;
        self.pending = None;
        if self.kind == MediaKind::AmbientAudio {
            self.is_muted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_muted_and_paused() {
        let state = PlaybackState::new(MediaKind::Video);
        assert!(!state.is_playing());
        assert!(state.is_muted());
        assert_eq!(state.next_request(), Some(PlaybackRequest::Play));
    }

    #[test]
    fn play_commits_only_after_resolve() {
        let mut state = PlaybackState::new(MediaKind::Video);
        assert_eq!(state.request_toggle(), Some(PlaybackRequest::Play));
        assert!(!state.is_playing());
        assert_eq!(state.request_toggle(), None);

        state.resolve(PlaybackRequest::Play, Ok(()));
        assert!(state.is_playing());
        assert_eq!(state.next_request(), Some(PlaybackRequest::Pause));
    }

    #[test]
    fn rejected_play_leaves_state_paused() {
        let mut state = PlaybackState::new(MediaKind::Video);
        state.request_toggle();
        state.resolve(
            PlaybackRequest::Play,
            Err(MediaError::Rejected("NotAllowedError".into())),
        );
        assert!(!state.is_playing());
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn mute_toggles_back() {
        let mut state = PlaybackState::new(MediaKind::Video);
        assert!(!state.toggle_mute());
        assert!(state.toggle_mute());
        assert!(state.is_muted());
    }

    #[test]
    fn video_end_stops() {
        let mut state = PlaybackState::new(MediaKind::Video);
        state.request_toggle();
        state.resolve(PlaybackRequest::Play, Ok(()));
        assert_eq!(state.ended_action(), EndedAction::Stop);
        state.finish(EndedAction::Stop);
        assert!(!state.is_playing());
    }

    #[test]
    fn ambient_track_restarts_when_playing() {
        let mut state = PlaybackState::new(MediaKind::AmbientAudio);
        state.request_toggle();
        state.resolve(PlaybackRequest::Play, Ok(()));
        assert!(!state.is_muted());

        assert_eq!(state.ended_action(), EndedAction::Restart);
        state.finish(EndedAction::Restart);
        assert!(!state.is_playing());
        assert_eq!(state.pending(), Some(PlaybackRequest::Play));

        state.resolve(PlaybackRequest::Play, Ok(()));
        assert!(state.is_playing());
    }

    #[test]
    fn ambient_track_idle_end_does_not_restart() {
        let mut state = PlaybackState::new(MediaKind::AmbientAudio);
        assert_eq!(state.ended_action(), EndedAction::Stop);
    }

    #[test]
    fn ambient_pause_mutes() {
        let mut state = PlaybackState::new(MediaKind::AmbientAudio);
        state.request_toggle();
        state.resolve(PlaybackRequest::Play, Ok(()));
        assert_eq!(state.request_toggle(), Some(PlaybackRequest::Pause));
        state.resolve(PlaybackRequest::Pause, Ok(()));
        assert!(!state.is_playing());
        assert!(state.is_muted());
    }

    #[test]
    fn answer_after_stop_is_ignored() {
        let mut state = PlaybackState::new(MediaKind::Video);
        state.request_toggle();
        state.stop();
        state.resolve(PlaybackRequest::Play, Ok(()));
        assert!(!state.is_playing());
        assert_eq!(state.pending(), None);
        assert_eq!(state.next_request(), Some(PlaybackRequest::Play));
    }

    #[test]
    fn answer_to_other_request_is_ignored() {
        let mut state = PlaybackState::new(MediaKind::AmbientAudio);
        state.request_toggle();
        state.resolve(PlaybackRequest::Pause, Ok(()));
        assert_eq!(state.pending(), Some(PlaybackRequest::Play));
        assert!(!state.is_playing());
        assert!(state.is_muted());
    }

    #[test]
    fn begin_refuses_while_pending() {
        let mut state = PlaybackState::new(MediaKind::Video);
        assert!(state.begin(PlaybackRequest::Play));
        assert!(!state.begin(PlaybackRequest::Pause));
        assert_eq!(state.pending(), Some(PlaybackRequest::Play));
    }

    #[test]
    fn end_decision_applies_once() {
        let mut state = PlaybackState::new(MediaKind::AmbientAudio);
        state.request_toggle();
        state.resolve(PlaybackRequest::Play, Ok(()));
        let action = state.ended_action();
        assert_eq!(action, EndedAction::Restart);
        assert!(state.is_playing());

        state.finish(action);
        assert!(!state.is_playing());
        assert_eq!(state.pending(), Some(PlaybackRequest::Play));
        assert_eq!(state.ended_action(), EndedAction::Stop);
    }

    #[test]
    fn stop_clears_pending() {
        let mut state = PlaybackState::new(MediaKind::Video);
        state.request_toggle();
        state.stop();
        assert_eq!(state.pending(), None);
        assert!(!state.is_playing());
    }
}
