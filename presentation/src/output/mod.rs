//! Output formatting: console summaries and HTML reports

pub mod console;
pub mod html;
