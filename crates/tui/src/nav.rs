//! Navigation channel: a process-wide publish/subscribe bus for
//! [`FocusEvent`]s.
//!
//! The sidebar publishes, the columns view subscribes, and neither holds a
//! reference to the other. Delivery is synchronous and fire-and-forget:
//! every handler registered at the moment `publish` is entered is invoked
//! exactly once, in subscription order, on the calling thread, before
//! `publish` returns. There is no buffering — with no subscriber registered
//! the event is dropped, which is the normal transient state while the
//! columns view is not mounted.
//!
//! Handlers registered during a delivery (as a side effect of another
//! handler) do not see the in-flight event: the subscriber list is
//! snapshotted at call entry, which also makes same-thread re-entrant
//! subscribe/unsubscribe safe.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use feedrail_types::{FOCUS_ON_COLUMN, FocusEvent};
use tracing::{debug, warn};

type Handler = Arc<dyn Fn(&FocusEvent) + Send + Sync>;

#[derive(Default)]
struct SubscriberList {
    next_id: u64,
    entries: Vec<(u64, Handler)>,
}

/// Shared handle to the navigation bus. Cloning is cheap and every clone
/// addresses the same subscriber registry.
#[derive(Clone, Default)]
pub struct NavChannel {
    inner: Arc<Mutex<SubscriberList>>,
}

impl std::fmt::Debug for NavChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavChannel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl NavChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler and returns its guard.
    ///
    /// The handler stays registered for the lifetime of the returned
    /// [`Subscription`]; dropping the guard unregisters it, so consumers
    /// must keep it alive while mounted and drop it on teardown.
    pub fn subscribe(&self, handler: impl Fn(&FocusEvent) + Send + Sync + 'static) -> Subscription {
        let mut list = lock(&self.inner);
        let id = list.next_id;
        list.next_id += 1;
        list.entries.push((id, Arc::new(handler)));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Synchronously delivers `event` to all currently registered handlers,
    /// in subscription order.
    ///
    /// Never errors: a panicking handler is isolated and logged, and
    /// delivery continues with the remaining handlers.
    pub fn publish(&self, event: &FocusEvent) {
        let handlers: Vec<Handler> = lock(&self.inner).entries.iter().map(|(_, h)| Arc::clone(h)).collect();
        if handlers.is_empty() {
            debug!(event = FOCUS_ON_COLUMN, column_id = %event.column_id, "no subscriber registered; event dropped");
            return;
        }
        for handler in handlers {
            if catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
                warn!(event = FOCUS_ON_COLUMN, column_id = %event.column_id, "subscriber panicked during delivery");
            }
        }
    }

    /// Number of currently registered handlers.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).entries.len()
    }
}

/// Guard for a registered handler; dropping it unsubscribes.
#[must_use = "dropping the subscription immediately unregisters the handler"]
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<SubscriberList>>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).entries.retain(|(id, _)| *id != self.id);
        }
    }
}

// The channel never raises; a poisoned lock is absorbed since the list is
// valid after any panic we could have observed (handlers run outside the
// lock).
fn lock(inner: &Mutex<SubscriberList>) -> MutexGuard<'_, SubscriberList> {
    match inner.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn event(id: &str, index: usize) -> FocusEvent {
        FocusEvent {
            column_id: id.into(),
            column_index: index,
            animated: true,
            highlight: true,
        }
    }

    #[test]
    fn publish_with_zero_subscribers_is_a_no_op() {
        let channel = NavChannel::new();
        channel.publish(&event("A", 0));
    }

    #[test]
    fn all_handlers_see_each_publish_exactly_once() {
        let channel = NavChannel::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let _s1 = channel.subscribe({
            let first = Arc::clone(&first);
            move |_| {
                first.fetch_add(1, Ordering::SeqCst);
            }
        });
        let _s2 = channel.subscribe({
            let second = Arc::clone(&second);
            move |_| {
                second.fetch_add(1, Ordering::SeqCst);
            }
        });

        channel.publish(&event("A", 0));
        channel.publish(&event("B", 1));

        assert_eq!(first.load(Ordering::SeqCst), 2);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn delivery_preserves_subscription_order() {
        let channel = NavChannel::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        let _s1 = channel.subscribe({
            let order = Arc::clone(&order);
            move |_| order.lock().unwrap().push(1)
        });
        let _s2 = channel.subscribe({
            let order = Arc::clone(&order);
            move |_| order.lock().unwrap().push(2)
        });

        channel.publish(&event("A", 0));
        assert_eq!(*order.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn panicking_handler_does_not_block_later_handlers() {
        let channel = NavChannel::new();
        let delivered = Arc::new(AtomicUsize::new(0));
        let _s1 = channel.subscribe(|_| panic!("faulty consumer"));
        let _s2 = channel.subscribe({
            let delivered = Arc::clone(&delivered);
            move |_| {
                delivered.fetch_add(1, Ordering::SeqCst);
            }
        });

        channel.publish(&event("A", 0));
        assert_eq!(delivered.load(Ordering::SeqCst), 1);

        // Channel stays usable after the panic
        channel.publish(&event("B", 1));
        assert_eq!(delivered.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_the_subscription_unregisters_the_handler() {
        let channel = NavChannel::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let subscription = channel.subscribe({
            let seen = Arc::clone(&seen);
            move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert_eq!(channel.subscriber_count(), 1);

        channel.publish(&event("A", 0));
        drop(subscription);
        assert_eq!(channel.subscriber_count(), 0);

        channel.publish(&event("A", 0));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handler_registered_during_delivery_misses_the_in_flight_event() {
        let channel = NavChannel::new();
        let late_calls = Arc::new(AtomicUsize::new(0));
        // Keep late subscriptions alive past the publish
        let holder: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

        let _s1 = channel.subscribe({
            let channel = channel.clone();
            let late_calls = Arc::clone(&late_calls);
            let holder = Arc::clone(&holder);
            move |_| {
                let late_calls = Arc::clone(&late_calls);
                let sub = channel.subscribe(move |_| {
                    late_calls.fetch_add(1, Ordering::SeqCst);
                });
                holder.lock().unwrap().push(sub);
            }
        });

        channel.publish(&event("A", 0));
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        // The late handler sees subsequent publishes
        channel.publish(&event("B", 1));
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }
}
