//! # Cooperative Processes
//!
//! A process is one unit of frame-driven work: the scheduler calls
//! [`Process::advance`] exactly once per frame, and the caller retires
//! the process once [`Process::is_finished`] reports true.
//!
//! Processes own their own [`Clock`](crate::clock::Clock)s and decide
//! inside `advance` whether anything is due this frame; the scheduler
//! never inspects their state.

use crate::scheduler::FrameTick;

/// A unit of cooperative, frame-driven work.
///
/// The scheduler does not own processes - callers hold them, pass them
/// to each frame, and drop them once finished. `advance` runs to
/// completion on the calling thread; there is no suspension and no
/// external cancellation of a frame in progress.
pub trait Process {
    /// Advances one frame.
    ///
    /// Called unconditionally every frame. A typical implementation
    /// checks its clocks against `tick.now`, acts when a deadline has
    /// passed, and rearms.
    fn advance(&mut self, tick: &FrameTick);

    /// True once the process has no more work. The scheduler keeps
    /// calling [`Process::advance`] regardless; stopping is the
    /// caller's decision.
    fn is_finished(&self) -> bool;
}
