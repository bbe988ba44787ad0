//! Desktop media element, driven through the webview with `document::eval`.

use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;

use super::MediaElement;
use crate::error::{PlayerError, Result};

type RejectionHandler = Rc<dyn Fn(PlayerError)>;

#[derive(Clone)]
pub struct PlatformMediaElement {
    /// The element id as a quoted JS string literal.
    id_literal: String,
    on_rejected: Option<RejectionHandler>,
}

/// The webview is only reachable asynchronously, so a missing element surfaces
/// through the rejection handler on `play()` instead of here.
pub fn find_media_element(id: &str) -> Result<PlatformMediaElement> {
    Ok(PlatformMediaElement {
        id_literal: serde_json::to_string(id)?,
        on_rejected: None,
    })
}

impl PlatformMediaElement {
    pub fn on_rejected(mut self, handler: impl Fn(PlayerError) + 'static) -> Self {
        self.on_rejected = Some(Rc::new(handler));
        self
    }
}

impl MediaElement for PlatformMediaElement {
    fn play(&self) -> Result<()> {
        let mut eval = document::eval(&format!(
            r#"
            const el = document.getElementById({id});
            if (!el) {{
                dioxus.send("media element missing");
            }} else {{
                try {{
                    await el.play();
                    dioxus.send(null);
                }} catch (e) {{
                    dioxus.send(String(e));
                }}
            }}
            "#,
            id = self.id_literal
        ));
        let handler = self.on_rejected.clone();
        spawn(async move {
            match eval.recv::<Option<String>>().await {
                Ok(None) => {}
                Ok(Some(reason)) => {
                    let err = PlayerError::PlaybackRejected(reason);
                    match handler {
                        Some(handler) => handler(err),
                        None => tracing::warn!("{err}"),
                    }
                }
                Err(err) => tracing::debug!("play() result unavailable: {err:?}"),
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        document::eval(&format!(
            "document.getElementById({id})?.pause();",
            id = self.id_literal
        ));
        Ok(())
    }

    fn set_current_time(&self, seconds: f64) {
        document::eval(&format!(
            "const el = document.getElementById({id}); if (el) {{ el.currentTime = {seconds}; }}",
            id = self.id_literal
        ));
    }
}

/// A `timeupdate` listener living in the webview, detached again on drop.
pub struct TimeUpdateSubscription {
    eval: document::Eval,
    task: Task,
}

impl TimeUpdateSubscription {
    pub fn register(
        element: &PlatformMediaElement,
        mut on_tick: impl FnMut(f64) + 'static,
    ) -> Result<Self> {
        let eval = document::eval(&format!(
            r#"
            const el = document.getElementById({id});
            if (el) {{
                const tick = () => dioxus.send(el.currentTime);
                el.addEventListener("timeupdate", tick);
                await dioxus.recv();
                el.removeEventListener("timeupdate", tick);
            }}
            "#,
            id = element.id_literal
        ));
        let mut ticks = eval.clone();
        let task = spawn(async move {
            while let Ok(current_time) = ticks.recv::<f64>().await {
                on_tick(current_time);
            }
        });
        Ok(Self { eval, task })
    }
}

impl Drop for TimeUpdateSubscription {
    fn drop(&mut self) {
        let _ = self.eval.send(true);
        self.task.cancel();
    }
}
