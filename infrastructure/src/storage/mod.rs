//! Round artifact storage
//!
//! - [`FileRoundStore`] - JSON record + HTML report under the output directory
//! - [`SystemReportViewer`] - opens a saved report with the platform opener

mod file_store;
mod viewer;

pub use file_store::FileRoundStore;
pub use viewer::SystemReportViewer;
