//! Audio Manager - imperative control of the widget's single `<audio>` element.
//! Everything here runs from effects and event handlers, never during render.

use crate::error::Result;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{find_media_element, PlatformMediaElement, TimeUpdateSubscription};
#[cfg(target_arch = "wasm32")]
pub use web::{find_media_element, PlatformMediaElement, TimeUpdateSubscription};

/// The imperative half of a media element.
pub trait MediaElement {
    fn play(&self) -> Result<()>;
    fn pause(&self) -> Result<()>;
    fn set_current_time(&self, seconds: f64);
}

/// Remembers the play flag last pushed to (or reported by) the element so each
/// change of `is_playing` turns into exactly one `play()` or `pause()`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayToggle {
    applied: Option<bool>,
    source: Option<String>,
}

impl PlayToggle {
    /// Points the toggle at the element's current source. A new source is a
    /// fresh media resource, so the next `sync` issues its call again.
    pub fn retarget(&mut self, source: &str) {
        if self.source.as_deref() != Some(source) {
            self.source = Some(source.to_string());
            self.applied = None;
        }
    }

    /// The element reported this state on its own (`play`/`pause` events).
    pub fn observe(&mut self, playing: bool) {
        self.applied = Some(playing);
    }

    /// The element went away; the next one must be synced from scratch.
    pub fn forget(&mut self) {
        self.applied = None;
    }

    /// Pushes `playing` to `element` if it differs from what was last applied.
    /// Returns whether a call was made.
    pub fn sync<M: MediaElement + ?Sized>(&mut self, element: &M, playing: bool) -> Result<bool> {
        if self.applied == Some(playing) {
            return Ok(false);
        }
        if playing {
            element.play()?;
        } else {
            element.pause()?;
        }
        self.applied = Some(playing);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Play,
        Pause,
        Seek(f64),
    }

    #[derive(Default)]
    struct RecordingElement {
        calls: RefCell<Vec<Call>>,
        reject_play: bool,
    }

    impl MediaElement for RecordingElement {
        fn play(&self) -> Result<()> {
            if self.reject_play {
                return Err(PlayerError::PlaybackRejected("NotAllowedError".into()));
            }
            self.calls.borrow_mut().push(Call::Play);
            Ok(())
        }

        fn pause(&self) -> Result<()> {
            self.calls.borrow_mut().push(Call::Pause);
            Ok(())
        }

        fn set_current_time(&self, seconds: f64) {
            self.calls.borrow_mut().push(Call::Seek(seconds));
        }
    }

    #[test]
    fn each_flag_change_issues_one_call() {
        let element = RecordingElement::default();
        let mut toggle = PlayToggle::default();
        toggle.observe(false);

        assert!(toggle.sync(&element, true).unwrap());
        assert!(!toggle.sync(&element, true).unwrap());
        assert!(toggle.sync(&element, false).unwrap());
        assert!(!toggle.sync(&element, false).unwrap());

        assert_eq!(*element.calls.borrow(), vec![Call::Play, Call::Pause]);
    }

    #[test]
    fn element_reported_state_is_not_echoed_back() {
        let element = RecordingElement::default();
        let mut toggle = PlayToggle::default();
        toggle.sync(&element, true).unwrap();

        // The user paused through the browser's own media controls.
        toggle.observe(false);
        assert!(!toggle.sync(&element, false).unwrap());
        assert_eq!(*element.calls.borrow(), vec![Call::Play]);
    }

    #[test]
    fn forgotten_state_resyncs_a_fresh_element() {
        let element = RecordingElement::default();
        let mut toggle = PlayToggle::default();
        toggle.sync(&element, true).unwrap();
        toggle.forget();
        toggle.sync(&element, true).unwrap();
        assert_eq!(*element.calls.borrow(), vec![Call::Play, Call::Play]);
    }

    #[test]
    fn new_source_gets_its_own_play_call() {
        let element = RecordingElement::default();
        let mut toggle = PlayToggle::default();
        toggle.retarget("https://cdn.test/a.mp3");
        toggle.sync(&element, true).unwrap();
        toggle.retarget("https://cdn.test/a.mp3");
        assert!(!toggle.sync(&element, true).unwrap());

        // Next episode: the flag is still true but the element holds a new source.
        toggle.retarget("https://cdn.test/b.mp3");
        assert!(toggle.sync(&element, true).unwrap());
        assert!(!toggle.sync(&element, true).unwrap());
        assert_eq!(*element.calls.borrow(), vec![Call::Play, Call::Play]);
    }

    #[test]
    fn rejected_play_is_retried_on_next_sync() {
        let element = RecordingElement {
            reject_play: true,
            ..Default::default()
        };
        let mut toggle = PlayToggle::default();
        toggle.observe(false);
        assert!(matches!(
            toggle.sync(&element, true),
            Err(PlayerError::PlaybackRejected(_))
        ));
        assert!(toggle.sync(&RecordingElement::default(), false).is_ok_and(|called| !called));
    }

    #[test]
    fn seek_goes_straight_to_the_element() {
        let element = RecordingElement::default();
        element.set_current_time(42.0);
        assert_eq!(*element.calls.borrow(), vec![Call::Seek(42.0)]);
    }
}
