// SPDX-License-Identifier: MPL-2.0
//! Resize notifications over a tokio broadcast channel.
//!
//! Each subscription owns a broadcast receiver, so dropping the subscription
//! is the unsubscribe and [`BroadcastResizeSource::subscriber_count`] reports
//! exactly the live subscriptions.

use crate::application::port::{ResizeEventSource, ResizeSubscription};
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};

/// Signals buffered per subscriber before older ones are coalesced.
const RESIZE_CHANNEL_CAPACITY: usize = 16;

/// Cloneable handle the window/container integration uses to announce resizes.
#[derive(Debug, Clone)]
pub struct BroadcastResizeSource {
    sender: broadcast::Sender<()>,
}

impl BroadcastResizeSource {
    /// Creates a source with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(RESIZE_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Announces a container resize to every live subscriber.
    pub fn notify(&self) {
        // Fails only when nobody listens, which is fine.
        let _ = self.sender.send(());
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl BroadcastResizeSource {
    /// Concrete subscription for async event loops that await
    /// [`BroadcastResizeSubscription::resized`].
    #[must_use]
    pub fn watch(&self) -> BroadcastResizeSubscription {
        BroadcastResizeSubscription {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for BroadcastResizeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeEventSource for BroadcastResizeSource {
    fn subscribe(&self) -> Box<dyn ResizeSubscription> {
        Box::new(self.watch())
    }
}

/// Subscription handed out by [`BroadcastResizeSource`].
#[derive(Debug)]
pub struct BroadcastResizeSubscription {
    receiver: broadcast::Receiver<()>,
}

impl BroadcastResizeSubscription {
    /// Waits for the next resize. Returns `false` once the source is gone.
    pub async fn resized(&mut self) -> bool {
        match self.receiver.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => true,
            Err(RecvError::Closed) => false,
        }
    }
}

impl ResizeSubscription for BroadcastResizeSubscription {
    fn take_resized(&mut self) -> bool {
        let mut resized = false;
        loop {
            match self.receiver.try_recv() {
                // A lagged receiver still missed at least one resize.
                Ok(()) | Err(TryRecvError::Lagged(_)) => resized = true,
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        resized
    }
}
