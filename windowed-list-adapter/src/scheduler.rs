use std::collections::BTreeMap;

/// A deferred-task queue driven by adapter ticks.
///
/// Tasks come out FIFO by due time; tasks due at the same millisecond come out in the order they
/// were scheduled. Nothing runs on its own: the adapter calls [`FrameScheduler::drain_due`] from
/// its frame/timer callback on the UI thread.
#[derive(Clone, Debug)]
pub struct FrameScheduler<T> {
    queue: BTreeMap<(u64, u64), T>,
    next_seq: u64,
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameScheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Queues `task` to become due at `now_ms + delay_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, task: T) {
        let due = now_ms.saturating_add(delay_ms);
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.insert((due, seq), task);
    }

    /// Removes and returns every task due at or before `now_ms`, in firing order.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<T> {
        let Some(bound) = now_ms.checked_add(1) else {
            return core::mem::take(&mut self.queue).into_values().collect();
        };
        let later = self.queue.split_off(&(bound, 0));
        core::mem::replace(&mut self.queue, later)
            .into_values()
            .collect()
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
