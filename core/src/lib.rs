//! Convert PNG images to JPEG, one file at a time or across a directory tree.
//!
//! [`walker::process`] is the entry point: it dispatches each file to
//! [`converter::convert_file`] and collects the outcomes in a
//! [`report::Report`].

pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod io;
pub mod report;
pub mod walker;

pub use config::ConvertConfig;
pub use error::ConvertError;
