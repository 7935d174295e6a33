//! Background playback worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::CueQueue;

/// Pause between consecutive cues so rapid ticks stay distinguishable.
const PLAYBACK_GAP: Duration = Duration::from_millis(70);

/// Host-provided playback primitive. `play` may block; it is only ever
/// invoked on the pipeline's worker thread.
pub trait CuePlayer: Send + Sync {
    fn play(&self, cue: &str);
}

/// Owns the cue queue and the dedicated worker thread draining it.
///
/// One pipeline per widget instance. The worker starts lazily via
/// [`ensure_started`](Self::ensure_started) and stops when
/// [`detach`](Self::detach) closes the queue; the consumer observes the
/// liveness flag after every dequeue, so an in-flight play finishes
/// normally and the loop exits on its own.
pub struct AudioPipeline {
    queue: Arc<CueQueue>,
    alive: Arc<AtomicBool>,
    worker: Option<thread::JoinHandle<()>>,
    capacity: usize,
}

impl AudioPipeline {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Arc::new(CueQueue::new(capacity)),
            alive: Arc::new(AtomicBool::new(false)),
            worker: None,
            capacity,
        }
    }

    /// The queue the feedback pipeline produces into.
    pub fn queue(&self) -> &Arc<CueQueue> {
        &self.queue
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Start the worker if it is not already running. After a detach this
    /// replaces the closed queue with a fresh, empty one.
    pub fn ensure_started(&mut self, player: Arc<dyn CuePlayer>) {
        if self.worker.is_some() {
            return;
        }
        if self.queue.is_closed() {
            self.queue = Arc::new(CueQueue::new(self.capacity));
        }
        self.alive.store(true, Ordering::Release);

        let queue = self.queue.clone();
        let alive = self.alive.clone();
        let spawned = thread::Builder::new()
            .name("tapeline-audio".into())
            .spawn(move || {
                debug!("audio worker started");
                while let Some(cue) = queue.take() {
                    if !alive.load(Ordering::Acquire) {
                        break;
                    }
                    player.play(&cue);
                    thread::sleep(PLAYBACK_GAP);
                }
                queue.clear();
                debug!("audio worker stopped");
            });

        match spawned {
            Ok(handle) => self.worker = Some(handle),
            Err(err) => {
                // Feedback stays silent but the widget keeps working.
                warn!("failed to spawn audio worker: {err}");
                self.alive.store(false, Ordering::Release);
            }
        }
    }

    /// Stop the worker and release the queue. Safe to call while the worker
    /// is mid-sleep or mid-play; the thread winds down on its own.
    pub fn detach(&mut self) {
        self.alive.store(false, Ordering::Release);
        self.queue.close();
        self.queue.clear();
        self.worker = None;
    }
}

impl Drop for AudioPipeline {
    fn drop(&mut self) {
        self.detach();
    }
}
