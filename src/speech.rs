//! Fire-and-forget spoken feedback.
//!
//! Utterances are queued to a single background worker so callers (always
//! the UI thread) never wait for the speech engine. The worker speaks one
//! utterance to completion before starting the next, preserving order.

use std::sync::mpsc::{self, Sender};
use std::thread;

/// Handle to the speech worker. Cheap to clone; all clones feed the same
/// worker thread.
#[derive(Clone)]
pub struct Speaker {
    tx: Option<Sender<String>>,
}

impl Speaker {
    /// Spawn the speech worker thread
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<String>();

        thread::spawn(move || {
            for text in rx {
                utter(&text);
            }
        });

        Self { tx: Some(tx) }
    }

    /// A speaker that drops every utterance (--mute)
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Queue an utterance and return immediately. Errors (engine missing,
    /// worker gone) are swallowed: speech is best-effort.
    pub fn say(&self, text: &str) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(text.to_string());
        }
    }

    /// A speaker whose utterances are captured for assertions instead of
    /// being spoken
    #[cfg(test)]
    pub fn capturing() -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx: Some(tx) }, rx)
    }
}

/// Drive the platform speech engine for one utterance, blocking until it
/// finishes. Only ever called on the worker thread.
fn utter(text: &str) {
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;
        let _ = Command::new("say").arg(text).status();
    }

    #[cfg(target_os = "linux")]
    {
        use std::process::Command;
        let _ = Command::new("espeak").arg(text).status();
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        // No speech engine on other platforms
        let _ = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_speaker_drops_utterances() {
        let speaker = Speaker::disabled();
        // Must not panic or block
        speaker.say("hello");
    }

    #[test]
    fn test_capturing_speaker_preserves_order() {
        let (speaker, transcript) = Speaker::capturing();
        speaker.say("Task added");
        speaker.say("Task deleted");

        assert_eq!(transcript.recv().unwrap(), "Task added");
        assert_eq!(transcript.recv().unwrap(), "Task deleted");
    }

    #[test]
    fn test_clones_share_the_worker() {
        let (speaker, transcript) = Speaker::capturing();
        let clone = speaker.clone();
        clone.say("from clone");

        assert_eq!(transcript.recv().unwrap(), "from clone");
    }
}
