//! Status line reporting

pub mod reporter;
