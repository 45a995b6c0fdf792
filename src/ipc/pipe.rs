//! Windows named pipe transport
//!
//! Instances create `\\.\pipe\gopher.*`. Pipes disappear with their owner, so
//! there is nothing to inspect before connecting and nothing to prune.

use async_trait::async_trait;
use std::io;

use crate::common::paths::{self, PIPE_ROOT};
use crate::common::SendError;

use super::discovery;
use super::protocol::Message;
use super::transport::{self, InstanceId, Transport};

/// Transport over the named pipe namespace
#[derive(Debug, Clone)]
pub struct PipeTransport {
    prefix: String,
}

impl PipeTransport {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

#[async_trait]
impl Transport for PipeTransport {
    async fn list(&self) -> io::Result<Vec<InstanceId>> {
        let names = discovery::scan(&paths::pipe_root(), &self.prefix).await?;
        // Plain concatenation: joining would mangle the `\\.\pipe\` root
        Ok(names
            .into_iter()
            .map(|name| InstanceId::new(format!("{PIPE_ROOT}{name}")))
            .collect())
    }

    async fn send(&self, id: &InstanceId, msg: &Message) -> Result<(), SendError> {
        let mut stream = transport::connect(id).await.map_err(SendError::connect)?;
        transport::send_message(&mut stream, msg).await
    }
}
