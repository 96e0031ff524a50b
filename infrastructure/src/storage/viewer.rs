//! Platform report opener

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use suite_application::{ReportViewer, SavedRound};
use tracing::{debug, warn};

/// Opens reports with `open` (macOS), `cmd /C start` (Windows) or
/// `xdg-open` (everything else). Failures are logged and ignored.
#[derive(Debug, Clone, Default)]
pub struct SystemReportViewer;

impl SystemReportViewer {
    fn command(target: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(target);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", target]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(target);
            cmd
        }
    }

    /// Start `cmd` detached from the terminal; a background thread waits on
    /// the child so it never lingers as a zombie.
    fn spawn_detached(mut cmd: Command) -> io::Result<JoinHandle<Option<ExitStatus>>> {
        let mut child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        Ok(thread::spawn(move || match child.wait() {
            Ok(status) => {
                debug!("Report viewer exited with {}", status);
                Some(status)
            }
            Err(e) => {
                warn!("Failed to wait on report viewer: {}", e);
                None
            }
        }))
    }
}

impl ReportViewer for SystemReportViewer {
    fn open(&self, saved: &SavedRound) {
        let target = saved.report_path.to_string_lossy();
        debug!("Opening {}", target);

        if let Err(e) = Self::spawn_detached(Self::command(&target)) {
            warn!("Could not open {}: {}", target, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_detached_child_is_reaped() {
        let handle = SystemReportViewer::spawn_detached(Command::new("true")).unwrap();
        let status = handle.join().unwrap();
        assert!(status.is_some_and(|s| s.success()));
    }

    #[test]
    fn test_missing_viewer_is_an_error() {
        let result =
            SystemReportViewer::spawn_detached(Command::new("model-suite-no-such-viewer"));
        assert!(result.is_err());
    }
}
