#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
pub mod engine;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod sim;
#[cfg(feature = "std")]
pub mod ui;

pub use engine::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level_from};
#[cfg(feature = "std")]
pub use session::{Command, Session, SessionConfig, SessionHandle};
