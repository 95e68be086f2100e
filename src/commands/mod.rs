//! CLI commands for notetree

pub mod add;
pub mod delete;
pub mod dispatch;
pub mod helpers;
pub mod list;
pub mod move_note;
pub mod show;
pub mod tag;
pub mod update;
