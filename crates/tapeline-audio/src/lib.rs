//! Audio feedback plumbing for the tapeline ruler.
//!
//! The UI thread produces cue asset names into a bounded blocking queue;
//! one background worker per widget drains it and hands each cue to the
//! host's [`CuePlayer`]. The worker is started lazily on the first scroll
//! event and torn down on widget detach.

mod queue;
mod worker;

pub use queue::CueQueue;
pub use worker::{AudioPipeline, CuePlayer};
