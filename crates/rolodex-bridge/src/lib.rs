pub mod error;
pub mod runner;
pub mod script;
pub mod service;

pub use error::{BridgeError, Result};
pub use runner::{ExecRunner, ScriptRunner};
pub use service::{AddressBook, BridgeOptions};
