//! Instance discovery and message delivery
//!
//! Uses Unix domain sockets on Unix/macOS and named pipes on Windows
//! via the interprocess crate.

pub mod discovery;
pub mod dispatch;
#[cfg(windows)]
pub mod pipe;
pub mod protocol;
#[cfg(unix)]
pub mod socket;
pub mod transport;

pub use dispatch::{DeliveryOutcome, DeliveryReport, Dispatcher};
pub use protocol::{DeliveryPolicy, Message, Method};
pub use transport::{platform_transport, InstanceId, PlatformTransport, Transport};
