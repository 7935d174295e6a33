//! Bounded blocking FIFO of cue asset names.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use log::debug;

struct QueueState {
    cues: VecDeque<String>,
    closed: bool,
}

/// A capacity-bounded FIFO shared between the UI thread (producer) and the
/// audio worker (consumer).
///
/// `take` blocks while the queue is empty and open; `close` wakes any
/// blocked consumer so detach never hangs. Offering to a full queue drops
/// the cue: audio feedback is best-effort and must never stall a gesture.
pub struct CueQueue {
    state: Mutex<QueueState>,
    ready: Condvar,
    capacity: usize,
}

impl CueQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(QueueState {
                cues: VecDeque::new(),
                closed: false,
            }),
            ready: Condvar::new(),
            capacity,
        }
    }

    /// Enqueue a cue. Returns false if the queue is full or closed.
    pub fn offer(&self, cue: impl Into<String>) -> bool {
        let cue = cue.into();
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.closed {
            return false;
        }
        if state.cues.len() >= self.capacity {
            debug!("cue queue full, dropping {cue}");
            return false;
        }
        state.cues.push_back(cue);
        self.ready.notify_one();
        true
    }

    /// Blocking dequeue. Returns `None` once the queue has been closed.
    pub fn take(&self) -> Option<String> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if let Some(cue) = state.cues.pop_front() {
                return Some(cue);
            }
            if state.closed {
                return None;
            }
            state = self
                .ready
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }
    }

    /// Drop oldest entries until at most `max_pending` remain. Called on
    /// touch-release to bound perceived audio lag after a fast gesture.
    pub fn trim_to(&self, max_pending: usize) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        while state.cues.len() > max_pending {
            state.cues.pop_front();
        }
    }

    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.cues.clear();
    }

    /// Close the queue, waking any blocked consumer.
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.closed = true;
        self.ready.notify_all();
    }

    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .cues
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_closed(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn fifo_order() {
        let queue = CueQueue::new(10);
        assert!(queue.offer("a"));
        assert!(queue.offer("b"));
        assert!(queue.offer("c"));
        assert_eq!(queue.take().as_deref(), Some("a"));
        assert_eq!(queue.take().as_deref(), Some("b"));
        assert_eq!(queue.take().as_deref(), Some("c"));
    }

    #[test]
    fn capacity_is_enforced() {
        let queue = CueQueue::new(3);
        assert!(queue.offer("a"));
        assert!(queue.offer("b"));
        assert!(queue.offer("c"));
        assert!(!queue.offer("d"));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn trim_drops_oldest_first() {
        let queue = CueQueue::new(100);
        for i in 0..9 {
            queue.offer(format!("cue_{i}"));
        }
        queue.trim_to(5);
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.take().as_deref(), Some("cue_4"));
    }

    #[test]
    fn close_unblocks_waiting_consumer() {
        let queue = Arc::new(CueQueue::new(10));
        let consumer_queue = queue.clone();
        let consumer = thread::spawn(move || consumer_queue.take());
        // Give the consumer a chance to block on the empty queue.
        thread::sleep(std::time::Duration::from_millis(20));
        queue.close();
        assert_eq!(consumer.join().unwrap(), None);
    }

    #[test]
    fn closed_queue_rejects_offers_but_drains() {
        let queue = CueQueue::new(10);
        queue.offer("a");
        queue.close();
        assert!(!queue.offer("b"));
        assert_eq!(queue.take().as_deref(), Some("a"));
        assert_eq!(queue.take(), None);
    }
}
