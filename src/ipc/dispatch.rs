//! Delivery policy driver
//!
//! Broadcast messages go to every instance in discovery order. Single-delivery
//! messages go to a shuffled list and stop at the first instance that takes
//! them. Per-instance failures are recorded, never returned as errors.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::{Error, Result, SendError};

use super::protocol::{DeliveryPolicy, Message};
use super::transport::{InstanceId, Transport};

/// Result of one send attempt
#[derive(Debug)]
pub enum DeliveryOutcome {
    Delivered,
    Failed(SendError),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// Every attempt made for one message, in attempt order
#[derive(Debug)]
pub struct DeliveryReport {
    pub policy: DeliveryPolicy,
    pub attempts: Vec<(InstanceId, DeliveryOutcome)>,
}

impl DeliveryReport {
    /// Number of instances that accepted the message
    pub fn delivered(&self) -> usize {
        self.attempts
            .iter()
            .filter(|(_, outcome)| outcome.is_delivered())
            .count()
    }

    /// Attempts that failed
    pub fn failures(&self) -> impl Iterator<Item = (&InstanceId, &SendError)> {
        self.attempts.iter().filter_map(|(id, outcome)| match outcome {
            DeliveryOutcome::Failed(err) => Some((id, err)),
            DeliveryOutcome::Delivered => None,
        })
    }

    /// A single-delivery message that no instance accepted
    pub fn is_unclaimed(&self) -> bool {
        self.policy == DeliveryPolicy::SingleDelivery && self.delivered() == 0
    }
}

/// Drives discovery and delivery over one transport
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Discover instances; failure here aborts the command
    pub async fn discover(&self) -> Result<Vec<InstanceId>> {
        self.transport.list().await.map_err(Error::Discovery)
    }

    /// Deliver `msg` according to its policy
    ///
    /// `rng` orders the candidates for single-delivery messages.
    pub async fn deliver<R: Rng + ?Sized>(
        &self,
        msg: &Message,
        rng: &mut R,
    ) -> Result<DeliveryReport> {
        let policy = msg.policy();
        let mut candidates = self.discover().await?;
        tracing::debug!(%msg, ?policy, instances = candidates.len(), "Dispatching");

        if policy == DeliveryPolicy::SingleDelivery {
            candidates.shuffle(rng);
        }

        let mut attempts = Vec::with_capacity(candidates.len());
        for id in candidates {
            let outcome = self.attempt(&id, msg).await;
            let done = policy == DeliveryPolicy::SingleDelivery && outcome.is_delivered();
            attempts.push((id, outcome));
            if done {
                break;
            }
        }

        Ok(DeliveryReport { policy, attempts })
    }

    async fn attempt(&self, id: &InstanceId, msg: &Message) -> DeliveryOutcome {
        match self.transport.send(id, msg).await {
            Ok(()) => {
                tracing::debug!(instance = %id, "Delivered");
                DeliveryOutcome::Delivered
            }
            Err(err) => {
                tracing::debug!(instance = %id, error = %err, "Send failed");
                if err.is_stale() {
                    self.prune(id).await;
                }
                DeliveryOutcome::Failed(err)
            }
        }
    }

    async fn prune(&self, id: &InstanceId) {
        match self.transport.prune(id).await {
            Ok(()) => tracing::info!(instance = %id, "Removed stale endpoint"),
            Err(e) => tracing::warn!(instance = %id, error = %e, "Failed to remove stale endpoint"),
        }
    }
}
