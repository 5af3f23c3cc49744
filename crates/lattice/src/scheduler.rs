//! # Frame Scheduler
//!
//! The cooperative ticker that turns real elapsed time into scaled
//! time and drives processes once per frame:
//!
//! ```text
//! Frame N:
//! ┌────────────────────────────────────────────────────────────┐
//! │ 1. Measure real delta since frame N-1 (clamped)            │
//! │ 2. scaled delta = real delta × timescale                   │
//! │ 3. Advance the scaled timeline                             │
//! │ 4. advance() every process exactly once with the tick      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! One `do_frame` call is one logical tick; the caller owns the loop
//! (`while !process.is_finished() { scheduler.do_frame(..) }`). Frame
//! N's effects are fully visible before frame N+1 begins.

use std::time::{Duration, Instant};

use crate::clock::ScaledInstant;
use crate::error::{SchedulerError, SchedulerResult};
use crate::process::Process;

/// Default clamp for a single frame's real delta.
///
/// A frame that measures more than this (debugger pause, suspended
/// laptop) advances the timeline as if exactly this much real time had
/// passed, preventing runaway catch-up.
pub const DEFAULT_MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Configuration for a [`Scheduler`].
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// Initial timescale. Must be finite and > 0.
    pub timescale: f64,
    /// Upper bound on the real delta a single frame may observe.
    pub max_frame_delta: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            timescale: 1.0,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
        }
    }
}

/// Per-frame view handed to every process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTick {
    /// Frame number; the first frame after `initialize()` is 0.
    pub frame: u64,
    /// The scaled timeline position after this frame's advance.
    pub now: ScaledInstant,
    /// Scaled delta for this frame.
    pub scaled_delta: Duration,
    /// Real (wall) delta for this frame, after clamping.
    pub real_delta: Duration,
}

/// Timescale-driven cooperative frame scheduler.
///
/// Lifecycle is two-stage: a freshly constructed scheduler is
/// uninitialized; [`Scheduler::initialize`] starts the timeline and
/// [`Scheduler::shutdown`] returns it to uninitialized. Driving frames
/// or changing the timescale outside that window fails
/// [`SchedulerError::NotInitialized`].
///
/// Each scheduler carries its own timeline and timescale - there is no
/// process-global state, so independent schedulers can tick side by
/// side (and tests can run them in parallel).
///
/// # Thread Safety
///
/// Single-threaded by design. `advance` runs to completion on the
/// calling thread; sharing a scheduler across threads requires
/// external synchronization.
pub struct Scheduler {
    timescale: f64,
    max_frame_delta: Duration,
    running: bool,
    /// Wall instant of the previous `do_frame`, None before the first.
    last_frame: Option<Instant>,
    now: ScaledInstant,
    frame_count: u64,
}

impl Scheduler {
    /// Creates an uninitialized scheduler.
    ///
    /// # Errors
    ///
    /// `InvalidTimescale` if `config.timescale` is zero, negative, or
    /// non-finite.
    pub fn new(config: SchedulerConfig) -> SchedulerResult<Self> {
        validate_timescale(config.timescale)?;
        Ok(Self {
            timescale: config.timescale,
            max_frame_delta: config.max_frame_delta,
            running: false,
            last_frame: None,
            now: ScaledInstant::ZERO,
            frame_count: 0,
        })
    }

    /// Starts (or restarts) the scheduler: the scaled timeline resets
    /// to zero and the frame counter to 0.
    pub fn initialize(&mut self) {
        self.running = true;
        self.last_frame = None;
        self.now = ScaledInstant::ZERO;
        self.frame_count = 0;
        tracing::debug!("scheduler initialized (timescale {})", self.timescale);
    }

    /// Stops the scheduler. Frames and timescale changes fail until
    /// the next [`Scheduler::initialize`].
    pub fn shutdown(&mut self) {
        self.running = false;
        self.last_frame = None;
        tracing::debug!("scheduler shut down after {} frames", self.frame_count);
    }

    /// True between `initialize()` and `shutdown()`.
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// The current timescale.
    #[inline]
    #[must_use]
    pub const fn timescale(&self) -> f64 {
        self.timescale
    }

    /// The current position on the scaled timeline.
    #[inline]
    #[must_use]
    pub const fn now(&self) -> ScaledInstant {
        self.now
    }

    /// Frames driven since the last `initialize()`.
    #[inline]
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Changes the timescale, effective from the next frame. Time
    /// already elapsed is never rescaled.
    ///
    /// # Errors
    ///
    /// `NotInitialized` outside the running window; `InvalidTimescale`
    /// for zero, negative, or non-finite factors - the previous
    /// timescale stays in effect.
    pub fn set_timescale(&mut self, factor: f64) -> SchedulerResult<()> {
        if !self.running {
            return Err(SchedulerError::NotInitialized);
        }
        validate_timescale(factor)?;
        tracing::debug!("timescale {} -> {}", self.timescale, factor);
        self.timescale = factor;
        Ok(())
    }

    /// Drives one frame against the wall clock.
    ///
    /// Measures real time since the previous `do_frame` (the first
    /// frame after `initialize()` measures zero) and delegates to
    /// [`Scheduler::step`].
    ///
    /// # Errors
    ///
    /// `NotInitialized` outside the running window.
    pub fn do_frame(&mut self, processes: &mut [&mut dyn Process]) -> SchedulerResult<FrameTick> {
        if !self.running {
            return Err(SchedulerError::NotInitialized);
        }
        let now = Instant::now();
        let real_delta = self
            .last_frame
            .map_or(Duration::ZERO, |prev| now.duration_since(prev));
        self.last_frame = Some(now);
        self.step(real_delta, processes)
    }

    /// Drives one frame with an explicit real delta.
    ///
    /// This is the deterministic core of [`Scheduler::do_frame`], and
    /// the entry point for fixed-step simulations and tests: the delta
    /// is clamped to `max_frame_delta`, scaled by the timescale, the
    /// timeline advances, and every process is advanced exactly once
    /// with the resulting tick.
    ///
    /// # Errors
    ///
    /// `NotInitialized` outside the running window.
    pub fn step(
        &mut self,
        real_delta: Duration,
        processes: &mut [&mut dyn Process],
    ) -> SchedulerResult<FrameTick> {
        if !self.running {
            return Err(SchedulerError::NotInitialized);
        }

        let real_delta = if real_delta > self.max_frame_delta {
            tracing::warn!(
                "frame delta {:?} clamped to {:?}",
                real_delta,
                self.max_frame_delta
            );
            self.max_frame_delta
        } else {
            real_delta
        };

        let scaled_delta = real_delta.mul_f64(self.timescale);
        self.now += scaled_delta;

        let tick = FrameTick {
            frame: self.frame_count,
            now: self.now,
            scaled_delta,
            real_delta,
        };
        self.frame_count += 1;

        for process in processes.iter_mut() {
            process.advance(&tick);
        }

        Ok(tick)
    }

    /// Blocking poll loop: drives `process` with `do_frame` until it
    /// reports finished, yielding the thread between frames. Returns
    /// the number of frames driven.
    ///
    /// # Errors
    ///
    /// `NotInitialized` outside the running window.
    pub fn run_to_completion(&mut self, process: &mut dyn Process) -> SchedulerResult<u64> {
        let mut frames = 0u64;
        while !process.is_finished() {
            let mut list: [&mut dyn Process; 1] = [&mut *process];
            self.do_frame(&mut list)?;
            frames += 1;
            std::thread::yield_now();
        }
        Ok(frames)
    }
}

fn validate_timescale(factor: f64) -> SchedulerResult<()> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(SchedulerError::InvalidTimescale(factor))
    }
}
