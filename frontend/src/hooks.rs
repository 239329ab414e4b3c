use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{self, Array};
use web_sys::{Element, HtmlMediaElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::state::playback::{
    EndedAction, MediaError, MediaKind, PlaybackRequest, PlaybackState,
};
use crate::state::visibility::VisibilityLatch;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Reveal latch for a section. Attach the returned ref to the observed element.
///
/// If the browser has no IntersectionObserver the section simply stays hidden.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let shown = use_state(|| false);

    {
        let node = node.clone();
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let observation = observe(&node, threshold, shown);
                move || {
                    if let Some((observer, _callback)) = observation {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    (node, *shown)
}

fn observe(
    node: &NodeRef,
    threshold: f64,
    shown: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let Some(element) = node.cast::<Element>() else {
        warn!("Reveal target is not mounted, section stays hidden");
        return None;
    };
    let mut latch = VisibilityLatch::new(threshold);
    let threshold = latch.threshold();

    let callback: ObserverCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                shown.set(true);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("Reveal animations unavailable: {}", describe(&e));
            None
        }
    }
}

/// Reveal latch tripped by a timer instead of scrolling.
#[hook]
pub fn use_delayed_reveal(delay_ms: u32) -> bool {
    let latch = use_state(|| VisibilityLatch::new(0.0));

    {
        let latch = latch.clone();
        use_effect_once(move || {
            let timeout = Timeout::new(delay_ms, move || {
                let mut next = *latch;
                if next.trip() {
                    latch.set(next);
                }
            });
            move || drop(timeout)
        });
    }

    latch.is_shown()
}

#[derive(Clone, PartialEq)]
struct Playback(PlaybackState);

enum PlaybackAction {
    Begin(PlaybackRequest),
    Resolve(PlaybackRequest, Result<(), MediaError>),
    ToggleMute,
    Ended(EndedAction),
    Stop,
}

impl Reducible for Playback {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            PlaybackAction::Begin(request) => {
                if !state.begin(request) {
                    debug!("Dropping {:?}, another request is pending", request);
                }
            }
            PlaybackAction::Resolve(request, outcome) => state.resolve(request, outcome),
            PlaybackAction::ToggleMute => {
                state.toggle_mute();
            }
            PlaybackAction::Ended(action) => state.finish(action),
            PlaybackAction::Stop => state.stop(),
        }
        Rc::new(Playback(state))
    }
}

#[derive(Clone, PartialEq)]
pub struct MediaControls {
    pub node: NodeRef,
    pub state: PlaybackState,
    pub toggle_play: Callback<()>,
    pub toggle_mute: Callback<()>,
    pub on_ended: Callback<()>,
    pub stop: Callback<()>,
}

/// Playback controller for the `<video>`/`<audio>` element behind `controls.node`.
#[hook]
pub fn use_media(kind: MediaKind) -> MediaControls {
    let node = use_node_ref();
    let playback = use_reducer(|| Playback(PlaybackState::new(kind)));

    let toggle_play = {
        let node = node.clone();
        let playback = playback.clone();
        Callback::from(move |_| {
            let Some(request) = playback.0.next_request() else {
                debug!("Ignoring toggle, a playback request is still pending");
                return;
            };
            let dispatcher = playback.dispatcher();
            dispatcher.dispatch(PlaybackAction::Begin(request));
            run_request(node.clone(), kind, request, dispatcher);
        })
    };

    let toggle_mute = {
        let node = node.clone();
        let playback = playback.clone();
        Callback::from(move |_| {
            let muted = !playback.0.is_muted();
            match node.cast::<HtmlMediaElement>() {
                Some(media) => media.set_muted(muted),
                None => warn!("{}", MediaError::Unavailable),
            }
            playback.dispatch(PlaybackAction::ToggleMute);
        })
    };

    let on_ended = {
        let node = node.clone();
        let playback = playback.clone();
        Callback::from(move |_| {
            let action = playback.0.ended_action();
            let dispatcher = playback.dispatcher();
            dispatcher.dispatch(PlaybackAction::Ended(action));
            if action == EndedAction::Restart {
                if let Some(media) = node.cast::<HtmlMediaElement>() {
                    media.set_current_time(0.0);
                }
                run_request(node.clone(), kind, PlaybackRequest::Play, dispatcher);
            }
        })
    };

    let stop = {
        let node = node.clone();
        let playback = playback.clone();
        Callback::from(move |_| {
            if let Some(media) = node.cast::<HtmlMediaElement>() {
                if let Err(e) = media.pause() {
                    warn!("Pause failed: {}", describe(&e));
                }
            }
            playback.dispatch(PlaybackAction::Stop);
        })
    };

    MediaControls {
        node,
        state: playback.0.clone(),
        toggle_play,
        toggle_mute,
        on_ended,
        stop,
    }
}

fn run_request(
    node: NodeRef,
    kind: MediaKind,
    request: PlaybackRequest,
    dispatcher: UseReducerDispatcher<Playback>,
) {
    spawn_local(async move {
        let outcome = match request {
            PlaybackRequest::Play => play(&node).await,
            PlaybackRequest::Pause => pause(&node),
        };
        match &outcome {
            Ok(()) => {
                debug!("{:?} {:?} done", kind, request);
                if kind == MediaKind::AmbientAudio {
                    if let Some(media) = node.cast::<HtmlMediaElement>() {
                        media.set_muted(request == PlaybackRequest::Pause);
                    }
                }
            }
            Err(e) => warn!("{:?} {:?} failed: {}", kind, request, e),
        }
        dispatcher.dispatch(PlaybackAction::Resolve(request, outcome));
    });
}

async fn play(node: &NodeRef) -> Result<(), MediaError> {
    let media = node.cast::<HtmlMediaElement>().ok_or(MediaError::Unavailable)?;
    let promise = media.play().map_err(|e| MediaError::Element(describe(&e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| MediaError::Rejected(describe(&e)))
}

fn pause(node: &NodeRef) -> Result<(), MediaError> {
    let media = node.cast::<HtmlMediaElement>().ok_or(MediaError::Unavailable)?;
    media.pause().map_err(|e| MediaError::Element(describe(&e)))
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
