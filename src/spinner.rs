//! Cosmetic progress indicator for pending completion calls
//!
//! The spinner is a cooperative task: started before a completion await,
//! stopped and cleared before any protocol output is written. `stop` waits
//! for the draw task to exit so no frame lands after the line is cleared;
//! `Drop` aborts the task on error paths as a backstop.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use colored::Colorize;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(80);

/// A single-line spinner bound to the current terminal line
pub struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    width: usize,
}

impl Spinner {
    /// Start redrawing `label` with a spinner frame until stopped
    pub fn start(label: &str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let text = label.to_string();
        // frame + space + label
        let width = label.chars().count() + 2;

        let handle = tokio::spawn(async move {
            let mut frame = 0usize;
            while flag.load(Ordering::Relaxed) {
                print!("\r{} {}", FRAMES[frame % FRAMES.len()].dimmed(), text.dimmed());
                let _ = io::stdout().flush();
                frame += 1;
                tokio::time::sleep(TICK).await;
            }
        });

        Self {
            running,
            handle: Some(handle),
            width,
        }
    }

    /// Stop the spinner and clear its line.
    ///
    /// Waits for the draw task to observe the stop flag, so the line is
    /// guaranteed clean before the caller prints protocol output.
    pub async fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        erase_line(self.width);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        // Backstop for early-return paths that skipped stop()
        if let Some(handle) = self.handle.take() {
            self.running.store(false, Ordering::Relaxed);
            handle.abort();
            erase_line(self.width);
        }
    }
}

fn erase_line(width: usize) {
    print!("\r{:width$}\r", "", width = width);
    let _ = io::stdout().flush();
}
