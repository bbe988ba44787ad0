//! Browser (wasm) media element backed by `web_sys::HtmlAudioElement`.

use std::rc::Rc;

use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlAudioElement};

use super::MediaElement;
use crate::error::{PlayerError, Result};

type RejectionHandler = Rc<dyn Fn(PlayerError)>;

#[derive(Clone)]
pub struct PlatformMediaElement {
    audio: HtmlAudioElement,
    on_rejected: Option<RejectionHandler>,
}

/// Looks up the widget's `<audio>` element by DOM id.
pub fn find_media_element(id: &str) -> Result<PlatformMediaElement> {
    let missing = || PlayerError::MediaElementMissing(id.to_string());
    let document = window().and_then(|w| w.document()).ok_or_else(missing)?;
    let audio = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
        .ok_or_else(missing)?;
    Ok(PlatformMediaElement {
        audio,
        on_rejected: None,
    })
}

impl PlatformMediaElement {
    /// Called when the promise returned by `play()` rejects (autoplay policy, bad source).
    pub fn on_rejected(mut self, handler: impl Fn(PlayerError) + 'static) -> Self {
        self.on_rejected = Some(Rc::new(handler));
        self
    }
}

impl MediaElement for PlatformMediaElement {
    fn play(&self) -> Result<()> {
        let promise = self
            .audio
            .play()
            .map_err(|e| PlayerError::PlaybackRejected(describe(&e)))?;
        let handler = self.on_rejected.clone();
        spawn(async move {
            if let Err(err) = JsFuture::from(promise).await {
                let err = PlayerError::PlaybackRejected(describe(&err));
                match handler {
                    Some(handler) => handler(err),
                    None => tracing::warn!("{err}"),
                }
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.audio
            .pause()
            .map_err(|e| PlayerError::PauseFailed(describe(&e)))
    }

    fn set_current_time(&self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }
}

/// A `timeupdate` listener that is removed again when dropped.
pub struct TimeUpdateSubscription {
    audio: HtmlAudioElement,
    callback: Closure<dyn FnMut()>,
}

impl TimeUpdateSubscription {
    pub fn register(
        element: &PlatformMediaElement,
        mut on_tick: impl FnMut(f64) + 'static,
    ) -> Result<Self> {
        let runtime = Runtime::current();
        let reader = element.audio.clone();
        let callback = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            on_tick(reader.current_time());
        }) as Box<dyn FnMut()>);

        element
            .audio
            .add_event_listener_with_callback("timeupdate", callback.as_ref().unchecked_ref())
            .map_err(|e| PlayerError::ListenerRegistration {
                event: "timeupdate",
                reason: describe(&e),
            })?;

        Ok(Self {
            audio: element.audio.clone(),
            callback,
        })
    }
}

impl Drop for TimeUpdateSubscription {
    fn drop(&mut self) {
        let _ = self.audio.remove_event_listener_with_callback(
            "timeupdate",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
