/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a focus session starts
pub fn notify_timer_started(minutes: u64) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "Focus mode for {} minutes started!" with title "Buddy - Timer""#,
            minutes
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = minutes;
    }
}

/// Send a notification when the focus session ends
pub fn notify_timer_done() {
    #[cfg(target_os = "macos")]
    {
        let script =
            r#"display notification "Time's up! Great work!" with title "Buddy - Time's Up""#;

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .output();
    }
}
