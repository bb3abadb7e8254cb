//! Runtime support for the generated bindings in [crate::proto].
//!
//! # Wire format
//! - [codec]
//! - [wire]
//!
//! # Message helpers
//! - [config]
//! - [log_entry]
//! - [module_file]
//! - [object]
//! - [secrets]
//! - [time]

pub mod codec;
pub mod config;
pub mod log_entry;
pub mod module_file;
pub mod object;
pub mod secrets;
pub mod time;
pub mod wire;
