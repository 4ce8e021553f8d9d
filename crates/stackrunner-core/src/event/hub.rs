// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

struct Registry<T> {
    next_id: u64,
    subscribers: Vec<(u64, flume::Sender<T>)>,
}

type SharedRegistry<T> = Arc<Mutex<Registry<T>>>;

fn lock<T>(registry: &Mutex<Registry<T>>) -> MutexGuard<'_, Registry<T>> {
    // A panicking subscriber must not take the whole channel down with it.
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A generic broadcast channel.
///
/// Each subscriber owns its own unbounded queue; publishing clones the event
/// into every queue. Cloning the hub yields another handle to the same set of
/// subscribers, which lets a host keep a publishing handle while the shell
/// subscribes.
pub struct EventHub<T: Clone + Send + 'static> {
    registry: SharedRegistry<T>,
}

impl<T: Clone + Send + 'static> EventHub<T> {
    /// Creates a hub with no subscribers.
    pub fn new() -> Self {
        log::trace!("EventHub initialized.");
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Delivers `event` to every live subscriber.
    ///
    /// Subscribers whose receiving end is gone are pruned on the way.
    ///
    /// ## Returns
    /// The number of subscribers the event was delivered to.
    pub fn publish(&self, event: T) -> usize {
        let mut registry = lock(&self.registry);
        registry
            .subscribers
            .retain(|(_, sender)| sender.send(event.clone()).is_ok());

        let delivered = registry.subscribers.len();
        if delivered == 0 {
            log::trace!("Event published with no subscribers.");
        }
        delivered
    }

    /// Registers a new subscriber.
    ///
    /// Only events published after this call are observed.
    pub fn subscribe(&self) -> Subscription<T> {
        let (sender, receiver) = flume::unbounded();
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, sender));

        Subscription {
            id,
            receiver,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Returns the number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).subscribers.len()
    }
}

impl<T: Clone + Send + 'static> Clone for EventHub<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T: Clone + Send + 'static> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A listener registered on an [`EventHub`].
///
/// Events queue up until drained. Dropping the subscription unregisters it.
pub struct Subscription<T> {
    id: u64,
    receiver: flume::Receiver<T>,
    registry: Weak<Mutex<Registry<T>>>,
}

impl<T> Subscription<T> {
    /// Takes the next queued event, if any, without blocking.
    pub fn try_next(&self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Takes every queued event without blocking.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Returns the number of queued events.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Unregisters the listener. Equivalent to dropping it.
    pub fn dispose(self) {
        log::trace!("Subscription {} disposed.", self.id);
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}
