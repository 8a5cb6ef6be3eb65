#![forbid(unsafe_code)]

//! Area-changed listeners.
//!
//! The frame calls every registered listener with the committed [`Area`]
//! after each commit. Listeners are called in subscription order and may
//! not reach back into the frame (they only get `&Area`).

use std::fmt;

use selframe_core::geometry::Area;

/// Boxed listener callback.
pub type AreaListener = Box<dyn FnMut(&Area) + Send>;

/// Opaque handle returned by [`Listeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Ordered registry of area-changed listeners.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, AreaListener)>,
}

impl Listeners {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; ids are never reused.
    pub fn subscribe(&mut self, listener: AreaListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver `area` to every listener.
    pub fn notify(&mut self, area: &Area) {
        for (_, listener) in &mut self.entries {
            listener(area);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}
