//! The focus timer: a one-shot countdown run by a background ticker
//! thread. The ticker publishes the remaining time once a second to a
//! shared display value the UI thread reads; the UI thread never blocks on
//! the ticker and the ticker cannot be stopped once started.

use crate::error::ActionError;
use crate::speech::Speaker;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Time between countdown ticks. Best-effort; drift is acceptable.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Default UI event-poll timeout in milliseconds, so the countdown pane
/// refreshes between keypresses
pub const UI_TICK_MS: u64 = 250;

/// Get UI tick duration
pub fn ui_tick_duration() -> Duration {
    Duration::from_millis(UI_TICK_MS)
}

/// Shared observable countdown value. The ticker thread writes, the UI
/// thread reads whatever was last published. Empty when no session is
/// displaying.
#[derive(Clone, Default)]
pub struct CountdownDisplay {
    value: Arc<Mutex<Option<String>>>,
}

impl CountdownDisplay {
    fn publish(&self, text: String) {
        if let Ok(mut value) = self.value.lock() {
            *value = Some(text);
        }
    }

    fn clear(&self) {
        if let Ok(mut value) = self.value.lock() {
            *value = None;
        }
    }

    /// Last published value, if a session is displaying
    pub fn read(&self) -> Option<String> {
        self.value.lock().ok().and_then(|value| value.clone())
    }
}

/// Handle owned by the application root. Holds the shared state the ticker
/// thread and the UI communicate through.
pub struct FocusTimer {
    display: CountdownDisplay,
    active: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
    speaker: Speaker,
    tick_interval: Duration,
}

impl FocusTimer {
    pub fn new(speaker: Speaker) -> Self {
        Self::with_interval(speaker, TICK_INTERVAL)
    }

    /// Construct with a custom tick interval (tests drive the ticker fast)
    pub fn with_interval(speaker: Speaker, tick_interval: Duration) -> Self {
        Self {
            display: CountdownDisplay::default(),
            active: Arc::new(AtomicBool::new(false)),
            finished: Arc::new(AtomicBool::new(false)),
            speaker,
            tick_interval,
        }
    }

    /// Parse the minute count and launch the ticker thread. Returns the
    /// number of minutes started, so the caller can show a start notice.
    ///
    /// Only one ticker may run at a time: starting while a session is
    /// active is rejected with a recoverable error rather than letting two
    /// tickers race on the shared display.
    pub fn start(&self, input: &str) -> Result<u64, ActionError> {
        let minutes: u64 = input
            .trim()
            .parse()
            .map_err(|_| ActionError::InvalidMinutes)?;
        if minutes == 0 {
            return Err(ActionError::InvalidMinutes);
        }

        // Validate the whole-seconds conversion before touching any shared
        // state, so an absurd minute count is a plain input error with no
        // residual state. The countdown counts through i64.
        let total_seconds = minutes
            .checked_mul(60)
            .filter(|&secs| secs <= i64::MAX as u64)
            .ok_or(ActionError::InvalidMinutes)?;

        if self.active.swap(true, Ordering::SeqCst) {
            return Err(ActionError::TimerActive);
        }

        self.speaker
            .say(&format!("Timer started for {} minutes.", minutes));
        let display = self.display.clone();
        let active = Arc::clone(&self.active);
        let finished = Arc::clone(&self.finished);
        let speaker = self.speaker.clone();
        let interval = self.tick_interval;

        thread::spawn(move || {
            run_countdown(total_seconds, &display, interval);
            active.store(false, Ordering::SeqCst);
            finished.store(true, Ordering::SeqCst);
            speaker.say("Time's up! Great work!");
        });

        Ok(minutes)
    }

    /// Last published countdown value ("MM:SS"), if a session is running
    pub fn remaining(&self) -> Option<String> {
        self.display.read()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Consume the completion latch. Returns true exactly once per
    /// finished session; the UI uses this to show the completion notice.
    pub fn take_finished(&self) -> bool {
        self.finished.swap(false, Ordering::SeqCst)
    }
}

/// Ticker loop: publish the remaining time, sleep one interval, decrement.
/// Runs through zero so "00:00" is displayed for a full tick, then clears
/// the display.
fn run_countdown(total_seconds: u64, display: &CountdownDisplay, interval: Duration) {
    let mut remaining = total_seconds as i64;
    while remaining >= 0 {
        display.publish(format_remaining(remaining as u64));
        thread::sleep(interval);
        remaining -= 1;
    }
    display.clear();
}

/// Format remaining seconds as zero-padded MM:SS
pub fn format_remaining(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
