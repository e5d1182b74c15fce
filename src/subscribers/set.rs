//! # SubscriberSet: non-blocking fan-out over multiple subscribers.
//!
//! Distributes each [`Event`] to all subscribers **without awaiting** their
//! processing: one bounded queue and one worker task per subscriber.
//!
//! ## Guarantees
//! - `emit(&Event)` returns immediately.
//! - Per-subscriber FIFO (queue order).
//! - Panics inside a subscriber are caught and reported on stderr.
//!
//! ## Not guaranteed
//! - No global ordering across different subscribers.
//! - No retries on queue overflow; the event is dropped for that
//!   subscriber only.

use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;

use crate::events::{Bus, Event};

use super::Subscribe;

/// Per-subscriber channel with metadata.
struct SubscriberChannel {
    name: &'static str,
    sender: mpsc::Sender<Arc<Event>>,
}

/// Composite fan-out with per-subscriber bounded queues and worker tasks.
pub struct SubscriberSet {
    channels: Vec<SubscriberChannel>,
}

impl SubscriberSet {
    /// Creates a new set and spawns one worker task per subscriber.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        let mut channels = Vec::with_capacity(subs.len());

        for sub in subs {
            let cap = sub.queue_capacity().max(1);
            let name = sub.name();
            let (tx, mut rx) = mpsc::channel::<Arc<Event>>(cap);

            tokio::spawn(async move {
                while let Some(ev) = rx.recv().await {
                    let fut = sub.on_event(ev.as_ref());
                    if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await
                    {
                        eprintln!(
                            "[growsort] subscriber '{}' panicked: {:?}",
                            sub.name(),
                            panic_err
                        );
                    }
                }
            });

            channels.push(SubscriberChannel { name, sender: tx });
        }

        Self { channels }
    }

    /// Fans one event out to all subscribers (non-blocking).
    ///
    /// If a subscriber's queue is full or its worker is gone, the event is
    /// dropped for that subscriber and a warning goes to stderr.
    pub fn emit(&self, event: &Event) {
        let ev = Arc::new(event.clone());
        for channel in &self.channels {
            match channel.sender.try_send(Arc::clone(&ev)) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    eprintln!(
                        "[growsort] subscriber '{}' dropped event: queue full",
                        channel.name
                    );
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    eprintln!(
                        "[growsort] subscriber '{}' dropped event: worker closed",
                        channel.name
                    );
                }
            }
        }
    }

    /// Subscribes to the bus and forwards every event to the set.
    ///
    /// The listener task ends when the bus is dropped; lagged receivers
    /// skip the overwritten events and keep going.
    pub fn attach(set: Arc<Self>, bus: &Bus) {
        let mut rx = bus.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => set.emit(&ev),
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct Counter(AtomicUsize);

    #[async_trait]
    impl Subscribe for Counter {
        async fn on_event(&self, _event: &Event) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn name(&self) -> &'static str {
            "counter"
        }
    }

    async fn wait_for(counter: &Counter, expected: usize) {
        for _ in 0..100 {
            if counter.0.load(Ordering::SeqCst) == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!(
            "subscriber saw {} events, expected {expected}",
            counter.0.load(Ordering::SeqCst)
        );
    }

    #[tokio::test]
    async fn events_reach_every_subscriber() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let set = SubscriberSet::new(vec![counter.clone() as Arc<dyn Subscribe>]);

        for _ in 0..3 {
            set.emit(&Event::now(EventKind::RunStarted));
        }
        wait_for(&counter, 3).await;
    }

    #[tokio::test]
    async fn attach_pumps_the_bus_into_the_set() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let set = Arc::new(SubscriberSet::new(vec![
            counter.clone() as Arc<dyn Subscribe>
        ]));

        let bus = Bus::new(16);
        SubscriberSet::attach(set, &bus);
        tokio::task::yield_now().await;

        bus.publish(Event::now(EventKind::RunStarted));
        bus.publish(Event::now(EventKind::RunCompleted));
        wait_for(&counter, 2).await;
    }
}
