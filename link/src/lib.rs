//! The peripheral link boundary and the command dispatcher.
//!
//! The radio itself (scanning, pairing, characteristic discovery) lives
//! outside this crate. Anything that can connect and write single bytes
//! satisfies [`LinkAdapter`].

mod adapter;
mod dispatcher;
mod loopback;
mod worker;

pub use adapter::*;
pub use dispatcher::*;
pub use loopback::*;
pub use worker::*;
