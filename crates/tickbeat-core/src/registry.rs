use crate::flags::TickFlags;
use crate::handle::WindowHandle;

/// Process-unique timer identifier.
pub type TimerId = u32;

/// First id handed out by [`TimerRegistry::allocate_id`].
///
/// Ids start above a reserved low range so they are visually
/// distinguishable from other identifier spaces in the host.
pub const FIRST_TIMER_ID: TimerId = 10_000;

/// One registered timer. Immutable once created: window and flags are
/// fixed for the timer's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEntry {
    pub id: TimerId,
    pub window: WindowHandle,
    pub flags: TickFlags,
}

/// Ordered table of registered timers, keyed by id.
///
/// Entries keep registration order; bulk cleanup walks newest-first so
/// removal during the walk never skips an entry. Lookup is linear; the
/// table holds a handful of timers, one per driven window.
#[derive(Debug)]
pub struct TimerRegistry {
    entries: Vec<TimerEntry>,
    next_id: TimerId,
}

impl Default for TimerRegistry {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: FIRST_TIMER_ID,
        }
    }
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next monotonically increasing id.
    ///
    /// Ids are never reused, even after their holder is removed.
    pub fn allocate_id(&mut self) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends an entry. The caller guarantees the id came from
    /// [`allocate_id`](Self::allocate_id) and is therefore unique.
    pub fn insert(&mut self, entry: TimerEntry) {
        self.entries.push(entry);
    }

    /// Finds the entry registered under `id`.
    pub fn find(&self, id: TimerId) -> Option<&TimerEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Removes and returns the entry registered under `id`, keeping
    /// the relative order of the remaining entries.
    pub fn remove(&mut self, id: TimerId) -> Option<TimerEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Returns all live ids, newest registration first.
    pub fn ids_newest_first(&self) -> Vec<TimerId> {
        self.entries.iter().rev().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
