//! Operation handlers for the `kudos` command.
//!
//! - [`operation`]: drives one page operation against a loaded listing
//! - [`output`]: writes the resulting page state for the terminal

pub mod operation;
pub mod output;
