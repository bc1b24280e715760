//! Broadcast bus for batch progress notifications.
//!
//! Built on `tokio::sync::broadcast`, the `ProgressBus` supports multiple
//! concurrent subscribers. Publishing with no active subscribers is a
//! no-op, so the dispatcher emits progress unconditionally and callers opt
//! in by subscribing.

use tokio::sync::broadcast;

use mnemo_types::dispatch::BatchProgress;

/// Multi-consumer bus for [`BatchProgress`] notifications.
///
/// Wraps a `tokio::sync::broadcast` channel. Cloning the bus clones the
/// sender, allowing multiple producers and consumers.
pub struct ProgressBus {
    sender: broadcast::Sender<BatchProgress>,
}

impl ProgressBus {
    /// Create a new bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create a new subscriber that will receive all future notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<BatchProgress> {
        self.sender.subscribe()
    }

    /// Publish a notification to all current subscribers.
    ///
    /// If there are no subscribers, the notification is silently dropped.
    pub fn publish(&self, progress: BatchProgress) {
        let _ = self.sender.send(progress);
    }
}

impl Clone for ProgressBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl std::fmt::Debug for ProgressBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBus")
            .field("receiver_count", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_subscribe_delivers_notification() {
        let bus = ProgressBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(BatchProgress {
            completed: 2,
            total: 5,
        });

        let received = rx.recv().await.unwrap();
        assert_eq!(received.completed, 2);
        assert_eq!(received.total, 5);
    }

    #[tokio::test]
    async fn publish_with_no_subscribers_does_not_panic() {
        let bus = ProgressBus::new(16);
        bus.publish(BatchProgress {
            completed: 1,
            total: 1,
        });
    }

    #[tokio::test]
    async fn multiple_subscribers_each_receive_notification() {
        let bus = ProgressBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(BatchProgress {
            completed: 3,
            total: 9,
        });

        assert_eq!(rx1.recv().await.unwrap().completed, 3);
        assert_eq!(rx2.recv().await.unwrap().completed, 3);
    }
}
