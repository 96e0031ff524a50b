//! Status reporting for rounds

use chrono::Local;
use colored::Colorize;
use suite_application::ProgressNotifier;

/// Prints `  [HH:MM:SS] message` status lines to stdout
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn new() -> Self {
        Self
    }

    /// Status line without colors, for a given clock reading
    pub fn format_line(time: &str, message: &str) -> String {
        format!("  [{}] {}", time, message)
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ConsoleProgress {
    fn status(&self, message: &str) {
        let time = Local::now().format("%H:%M:%S").to_string();
        let message = if message.contains("ERROR") || message.starts_with("file not found") {
            message.red().to_string()
        } else {
            message.to_string()
        };
        println!("{}", Self::format_line(&time, &message));
    }
}
