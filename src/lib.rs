//! A bounded undo/redo command stack.
//!
//! [`CommandStacker`] records reversible [`Command`]s and lets the caller step
//! backward and forward through them. Running or adding a new command drops
//! the redo history.

pub mod command;
pub mod config;
pub mod stacker;

pub use command::{Command, FnCommand};
pub use config::{CommandStackerOptions, DEFAULT_CAPACITY};
pub use stacker::CommandStacker;
