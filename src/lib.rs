//! gopherc - control running Gopher desktop companions
//!
//! This library discovers running instances and delivers commands to them,
//! either to every instance or to one picked at random.

pub mod cli;
pub mod commands;
pub mod common;
pub mod ipc;

// Re-export commonly used types for tests
pub use common::{Error, Result, SendError};
pub use ipc::{DeliveryOutcome, DeliveryPolicy, Dispatcher, InstanceId, Message, Transport};
