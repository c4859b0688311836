//! Completion notification fan-out.
//!
//! The publisher stores each new snapshot before telling anyone about it,
//! then notifies trait-object listeners and channel subscribers in the
//! order they registered. Delivery is synchronous: `publish` returns only
//! after every listener has run.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use landform_core::events::TerrainGenerated;

use crate::mesh::GeometrySnapshot;

/// Receives a notification after every completed generation.
pub trait TerrainListener: Send {
    fn on_terrain_generated(&mut self, event: &TerrainGenerated);
}

/// Listeners shared with the caller are registered behind a mutex so
/// the caller can still inspect them between generations.
impl<L: TerrainListener> TerrainListener for Arc<Mutex<L>> {
    fn on_terrain_generated(&mut self, event: &TerrainGenerated) {
        let mut inner = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        inner.on_terrain_generated(event);
    }
}

struct FnListener<F>(F);

impl<F> TerrainListener for FnListener<F>
where
    F: FnMut(&TerrainGenerated) + Send,
{
    fn on_terrain_generated(&mut self, event: &TerrainGenerated) {
        (self.0)(event)
    }
}

enum Subscriber {
    Listener(Box<dyn TerrainListener>),
    Channel(mpsc::Sender<TerrainGenerated>),
}

/// Holds the latest snapshot and the registered subscribers.
#[derive(Default)]
pub struct TerrainPublisher {
    subscribers: Vec<Subscriber>,
    current: Option<Arc<GeometrySnapshot>>,
}

impl TerrainPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners run in registration order.
    pub fn register(&mut self, listener: impl TerrainListener + 'static) {
        self.subscribers.push(Subscriber::Listener(Box::new(listener)));
    }

    /// Register a closure as a listener.
    pub fn register_fn<F>(&mut self, f: F)
    where
        F: FnMut(&TerrainGenerated) + Send + 'static,
    {
        self.register(FnListener(f));
    }

    /// Subscribe through a channel. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> mpsc::Receiver<TerrainGenerated> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(Subscriber::Channel(tx));
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Latest published snapshot, if any.
    ///
    /// The returned handle stays valid after later publications replace it.
    pub fn current(&self) -> Option<Arc<GeometrySnapshot>> {
        self.current.clone()
    }

    /// Store `snapshot` as current and notify every subscriber.
    pub fn publish(&mut self, snapshot: GeometrySnapshot) -> Arc<GeometrySnapshot> {
        let snapshot = Arc::new(snapshot);
        self.current = Some(Arc::clone(&snapshot));

        let event = snapshot.event();
        self.notify(&event);
        snapshot
    }

    fn notify(&mut self, event: &TerrainGenerated) {
        let before = self.subscribers.len();
        self.subscribers.retain_mut(|subscriber| match subscriber {
            Subscriber::Listener(listener) => {
                listener.on_terrain_generated(event);
                true
            }
            Subscriber::Channel(tx) => tx.send(*event).is_ok(),
        });

        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            warn!(dropped, "pruned disconnected terrain subscribers");
        }
        debug!(
            subscribers = self.subscribers.len(),
            vertices = event.vertex_count,
            "terrain generation published"
        );
    }
}
