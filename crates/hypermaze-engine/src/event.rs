//! World events and subscriber channels.
//!
//! Each subscriber owns the receiving end of an unbounded crossbeam
//! channel. Publishing never blocks the world; a subscriber that drops
//! its receiver is pruned on the next publish.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use hypermaze_core::{Axis, Coord, GenerationId, Step};
use indexmap::IndexMap;
use std::fmt;

/// Something observable that happened in the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldEvent {
    /// A move passed validation. Published before the player moves.
    MoveCommitted {
        /// Player position before the move.
        from: Coord,
        /// Player position after the move.
        to: Coord,
        /// Axis moved along.
        axis: Axis,
        /// Direction moved.
        step: Step,
    },
    /// A new lattice and goal replaced the old ones.
    Reset {
        /// Generation of the new lattice.
        generation: GenerationId,
        /// The new goal.
        goal: Coord,
    },
}

/// Handle identifying one subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fan-out of [`WorldEvent`]s to subscribers.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: IndexMap<SubscriberId, Sender<WorldEvent>>,
    next_id: u64,
}

impl EventBus {
    /// An empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    ///
    /// The receiver sees every event published after this call, in
    /// publish order.
    pub fn subscribe(&mut self) -> (SubscriberId, Receiver<WorldEvent>) {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.insert(id, tx);
        (id, rx)
    }

    /// Remove a subscriber. Its receiver disconnects once drained.
    ///
    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.shift_remove(&id).is_some()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver `event` to every subscriber, dropping any whose receiver
    /// is gone. Returns the number of subscribers reached.
    pub fn publish(&mut self, event: &WorldEvent) -> usize {
        let mut delivered = 0;
        self.subscribers.retain(|id, tx| match tx.try_send(event.clone()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!(subscriber = %id, "pruned disconnected subscriber");
                false
            }
            // Unbounded channels are never full.
            Err(TrySendError::Full(_)) => true,
        });
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn reset(n: u64) -> WorldEvent {
        WorldEvent::Reset {
            generation: GenerationId(n),
            goal: smallvec![1, 2, 3],
        }
    }

    #[test]
    fn events_arrive_in_publish_order() {
        let mut bus = EventBus::new();
        let (_, rx) = bus.subscribe();
        bus.publish(&reset(1));
        bus.publish(&reset(2));
        let got: Vec<WorldEvent> = rx.try_iter().collect();
        assert_eq!(got, vec![reset(1), reset(2)]);
    }

    #[test]
    fn every_subscriber_gets_a_copy() {
        let mut bus = EventBus::new();
        let (_, a) = bus.subscribe();
        let (_, b) = bus.subscribe();
        assert_eq!(bus.publish(&reset(1)), 2);
        assert_eq!(a.try_recv(), Ok(reset(1)));
        assert_eq!(b.try_recv(), Ok(reset(1)));
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut bus = EventBus::new();
        let (id, rx) = bus.subscribe();
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.publish(&reset(1)), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        let mut bus = EventBus::new();
        let (_, rx) = bus.subscribe();
        let (_, keep) = bus.subscribe();
        drop(rx);
        assert_eq!(bus.subscriber_count(), 2);
        assert_eq!(bus.publish(&reset(1)), 1);
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(keep.len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut bus = EventBus::new();
        let (a, _ra) = bus.subscribe();
        bus.unsubscribe(a);
        let (b, _rb) = bus.subscribe();
        assert_ne!(a, b);
    }
}
