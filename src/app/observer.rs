// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/observer.rs
//
// Typed publish/subscribe for selection events.

use std::fmt;

use super::message::{CropEvent, EventKind};

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Filter to receive only specific event kinds.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these kinds.
    Kinds(Vec<EventKind>),
}

impl EventFilter {
    pub fn only(kind: EventKind) -> Self {
        Self::Kinds(vec![kind])
    }

    /// Check if an event matches this filter
    pub fn matches(&self, event: &CropEvent) -> bool {
        match self {
            Self::All => true,
            Self::Kinds(kinds) => kinds.contains(&event.kind()),
        }
    }
}

type EventHandler = Box<dyn Fn(&CropEvent)>;

/// Synchronous, single-threaded event bus.
///
/// Handlers run on the publishing call, in subscription order.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<(SubscriptionId, EventFilter, EventHandler)>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events accepted by `filter`.
    pub fn subscribe<F>(&mut self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&CropEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, filter, Box::new(handler)));
        log::debug!("Subscription {id} added");
        id
    }

    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _, _)| *sub != id);
        let removed = self.handlers.len() != before;
        if removed {
            log::debug!("Subscription {id} removed");
        }
        removed
    }

    /// Deliver `event` and return how many handlers received it.
    pub fn publish(&self, event: &CropEvent) -> usize {
        let mut delivered = 0;
        for (_, filter, handler) in &self.handlers {
            if filter.matches(event) {
                handler(event);
                delivered += 1;
            }
        }
        log::trace!("Published {:?} to {delivered} handler(s)", event.kind());
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
