//! Unix domain socket transport
//!
//! Instances bind `<socket_dir>/gopher.*`. A crashed instance leaves its
//! socket file behind; connecting to it fails and the file is reported stale.

use async_trait::async_trait;
use std::io;
use std::os::unix::fs::FileTypeExt;
use std::path::PathBuf;

use crate::common::SendError;

use super::discovery;
use super::protocol::Message;
use super::transport::{self, InstanceId, Transport};

/// Transport over socket files in one directory
#[derive(Debug, Clone)]
pub struct SocketTransport {
    dir: PathBuf,
    prefix: String,
}

impl SocketTransport {
    pub fn new(dir: impl Into<PathBuf>, prefix: &str) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.to_string(),
        }
    }
}

#[async_trait]
impl Transport for SocketTransport {
    async fn list(&self) -> io::Result<Vec<InstanceId>> {
        let names = discovery::scan(&self.dir, &self.prefix).await?;
        Ok(names
            .into_iter()
            .map(|name| InstanceId::new(self.dir.join(name).to_string_lossy()))
            .collect())
    }

    async fn send(&self, id: &InstanceId, msg: &Message) -> Result<(), SendError> {
        let meta = tokio::fs::metadata(id.as_path())
            .await
            .map_err(SendError::connect)?;
        if !meta.file_type().is_socket() {
            return Err(SendError::KindMismatch);
        }

        let mut stream = transport::connect(id).await.map_err(SendError::stale)?;
        transport::send_message(&mut stream, msg).await
    }

    async fn prune(&self, id: &InstanceId) -> io::Result<()> {
        match tokio::fs::remove_file(id.as_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::net::UnixListener;

    #[tokio::test]
    async fn test_regular_file_is_kind_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gopher.file");
        std::fs::write(&path, b"").unwrap();

        let transport = SocketTransport::new(dir.path(), "gopher.");
        let id = InstanceId::new(path.to_string_lossy());
        let err = transport.send(&id, &Message::Jump).await.unwrap_err();

        assert!(matches!(err, SendError::KindMismatch));
        assert!(!err.is_stale());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_vanished_endpoint_is_not_stale() {
        let dir = tempfile::tempdir().unwrap();
        let transport = SocketTransport::new(dir.path(), "gopher.");
        let id = InstanceId::new(dir.path().join("gopher.gone").to_string_lossy());

        let err = transport.send(&id, &Message::Jump).await.unwrap_err();
        assert!(matches!(err, SendError::Connect { stale: false, .. }));
    }

    #[tokio::test]
    async fn test_refused_socket_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gopher.dead");
        drop(UnixListener::bind(&path).unwrap());

        let transport = SocketTransport::new(dir.path(), "gopher.");
        let id = InstanceId::new(path.to_string_lossy());
        let err = transport.send(&id, &Message::Close).await.unwrap_err();

        assert!(err.is_stale());
        // send never touches the namespace itself
        assert!(path.exists());

        transport.prune(&id).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_prune_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let transport = SocketTransport::new(dir.path(), "gopher.");
        let id = InstanceId::new(dir.path().join("gopher.none").to_string_lossy());
        assert!(transport.prune(&id).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_joins_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("gopher.7"), b"").unwrap();

        let transport = SocketTransport::new(dir.path(), "gopher.");
        let ids = transport.list().await.unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].as_path(), dir.path().join("gopher.7"));
    }
}
