//! Notetree Core Library
//!
//! Storage engine for a hierarchical, file-backed note store: one text file
//! per note, one metadata index per directory.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod note;
pub mod store;
