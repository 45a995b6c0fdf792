//! Cross-platform IPC transport layer
//!
//! Abstracts Unix domain sockets (Unix/macOS) and named pipes (Windows)
//! using the interprocess crate. Each send is one connection carrying one
//! message; nothing is ever read back.

use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use crate::common::config::Config;
use crate::common::SendError;

use super::protocol::Message;

// Local socket types shared by both backends
pub mod platform {
    pub use interprocess::local_socket::tokio::{prelude::*, Stream};
    pub use interprocess::local_socket::GenericFilePath;
}

use platform::*;

/// Name of one addressable instance
///
/// A socket path on Unix, a `\\.\pipe\` name on Windows. Only valid until the
/// instance restarts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discovery and delivery for one addressing scheme
#[async_trait]
pub trait Transport: Send + Sync {
    /// Enumerate every instance currently registered, in no particular order
    async fn list(&self) -> io::Result<Vec<InstanceId>>;

    /// Deliver one message to one instance
    async fn send(&self, id: &InstanceId, msg: &Message) -> Result<(), SendError>;

    /// Remove the artifact behind an instance a failed send flagged as stale
    async fn prune(&self, _id: &InstanceId) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(unix)]
pub type PlatformTransport = super::socket::SocketTransport;

#[cfg(windows)]
pub type PlatformTransport = super::pipe::PipeTransport;

/// Build the transport for the current platform
#[cfg(unix)]
pub fn platform_transport(config: &Config) -> PlatformTransport {
    super::socket::SocketTransport::new(config.socket_dir(), &config.discovery.prefix)
}

#[cfg(windows)]
pub fn platform_transport(config: &Config) -> PlatformTransport {
    super::pipe::PipeTransport::new(&config.discovery.prefix)
}

/// Connect to the endpoint named by `id`
pub async fn connect(id: &InstanceId) -> io::Result<Stream> {
    let name = id.as_path().to_fs_name::<GenericFilePath>()?;
    Stream::connect(name).await
}

/// Write an encoded message and flush it
///
/// The stream is closed when the caller drops it.
pub async fn send_message<W: AsyncWriteExt + Unpin>(
    writer: &mut W,
    msg: &Message,
) -> Result<(), SendError> {
    let data = msg.encode()?;
    writer.write_all(&data).await.map_err(SendError::Write)?;
    writer.flush().await.map_err(SendError::Write)?;
    Ok(())
}
