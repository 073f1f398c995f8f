//! Exclusive video playback across review cards.
//!
//! Cards register their video element in a [`MediaRegistry`] keyed by review
//! id. [`activate`] applies a thumbnail click: it stops every other video,
//! then toggles the clicked one. Starting playback is asynchronous in the
//! browser, so a start is handed back as a future. [`PlayRequests`] numbers
//! the clicks and decides, once that future settles, whether the card may
//! become active or was overtaken by a later click.

use std::collections::HashMap;
use futures::future::{FutureExt, LocalBoxFuture};
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use super::models::ReviewId;

pub const PLAY_FAILED_NOTICE: &str = "Failed to play video. Please try again.";
pub const PLAYBACK_ERROR_NOTICE: &str = "Video playback error. Please try another testimonial.";

#[derive(Debug, Error, PartialEq)]
#[error("video playback was refused: {0}")]
pub struct PlaybackError(pub String);

impl From<JsValue> for PlaybackError {
    fn from(value: JsValue) -> Self {
        PlaybackError(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// The slice of a media element the playback logic needs.
pub trait MediaHandle {
    fn is_paused(&self) -> bool;
    fn pause(&self);
    fn rewind(&self);
    /// Begin playback; resolves once the element is actually playing.
    fn start(&self) -> LocalBoxFuture<'static, Result<(), PlaybackError>>;
}

impl MediaHandle for HtmlVideoElement {
    fn is_paused(&self) -> bool {
        self.paused()
    }

    fn pause(&self) {
        if let Err(e) = web_sys::HtmlMediaElement::pause(self) {
            log::warn!("Pausing video failed: {:?}", e);
        }
    }

    fn rewind(&self) {
        self.set_current_time(0.0);
    }

    fn start(&self) -> LocalBoxFuture<'static, Result<(), PlaybackError>> {
        let promise = self.play();
        async move {
            let promise = promise.map_err(PlaybackError::from)?;
            JsFuture::from(promise).await.map_err(PlaybackError::from)?;
            Ok(())
        }
        .boxed_local()
    }
}

/// Video handles of the currently mounted cards.
pub struct MediaRegistry<H> {
    handles: HashMap<ReviewId, H>,
}

impl<H> Default for MediaRegistry<H> {
    fn default() -> Self {
        Self { handles: HashMap::new() }
    }
}

impl<H: MediaHandle> MediaRegistry<H> {
    pub fn attach(&mut self, id: ReviewId, handle: H) {
        self.handles.insert(id, handle);
    }

    pub fn detach(&mut self, id: &ReviewId) {
        self.handles.remove(id);
    }

    pub fn get(&self, id: &ReviewId) -> Option<&H> {
        self.handles.get(id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

/// What a thumbnail click resolved to.
pub enum Activation {
    /// Playback was requested; settle the result through [`PlayRequests`].
    Starting(LocalBoxFuture<'static, Result<(), PlaybackError>>),
    /// The clicked video was playing and is now paused; clear the active id.
    Stopped,
    /// The clicked card has no mounted video.
    Unattached,
}

/// Stop every video except the clicked one, then toggle the clicked one.
///
/// Any other video that is playing, or is the active one, is paused and
/// rewound. A start still in flight from an earlier click has already flipped
/// its element out of the paused state, so it is caught here too.
pub fn activate<H: MediaHandle>(
    registry: &MediaRegistry<H>,
    active: Option<&ReviewId>,
    clicked: &ReviewId,
) -> Activation {
    for (id, other) in registry.handles.iter().filter(|(id, _)| *id != clicked) {
        if active == Some(id) || !other.is_paused() {
            other.pause();
            other.rewind();
        }
    }

    let Some(video) = registry.get(clicked) else {
        log::debug!("No video attached for review {}", clicked);
        return Activation::Unattached;
    };

    if video.is_paused() {
        Activation::Starting(video.start())
    } else {
        video.pause();
        Activation::Stopped
    }
}

/// How a start request ended once its promise settled.
#[derive(Debug, PartialEq)]
pub enum StartOutcome {
    Playing(ReviewId),
    Refused,
    /// A later click replaced this request; the result is ignored.
    Superseded,
}

/// Orders thumbnail clicks so that only the latest one may mark a card
/// active once its asynchronous start settles.
#[derive(Debug, Default)]
pub struct PlayRequests {
    latest: u64,
    starting: Option<ReviewId>,
}

impl PlayRequests {
    /// Record a click. `starting` is the card whose start was requested, if
    /// the click requested one.
    pub fn begin(&mut self, starting: Option<&ReviewId>) -> u64 {
        self.latest += 1;
        self.starting = starting.cloned();
        self.latest
    }

    pub fn settle<H: MediaHandle>(
        &self,
        registry: &MediaRegistry<H>,
        ticket: u64,
        id: &ReviewId,
        result: Result<(), PlaybackError>,
    ) -> StartOutcome {
        if ticket != self.latest {
            // An outdated start that still succeeded must not keep playing
            // behind another card, unless the latest click restarted the same one.
            if result.is_ok() && self.starting.as_ref() != Some(id) {
                if let Some(video) = registry.get(id) {
                    video.pause();
                    video.rewind();
                }
            }
            return StartOutcome::Superseded;
        }
        match result {
            Ok(()) => StartOutcome::Playing(id.clone()),
            Err(e) => {
                log::error!("Video play failed: {}", e);
                StartOutcome::Refused
            }
        }
    }
}
