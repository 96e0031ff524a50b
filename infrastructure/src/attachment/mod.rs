//! File attachment loading

mod local;

pub use local::LocalAttachmentLoader;
