//! Pointer input processing: raw touch samples in, gesture commands and
//! measurements out.

mod command;
mod event;
mod measurement;
mod target;
mod tracker;

pub use command::*;
pub use event::*;
pub use measurement::*;
pub use target::*;
pub use tracker::*;
