//! # Scaled Time
//!
//! Time as the scheduler's processes see it: real elapsed time
//! multiplied by the scheduler's timescale. Points on that timeline
//! are [`ScaledInstant`]s; [`Clock`] is a countdown against them.
//!
//! Nothing here reads the wall clock. The current instant always
//! arrives explicitly from the scheduler (via the frame tick), which
//! keeps the scaling dependency visible at every call site and lets
//! independent schedulers run their own timelines side by side.

use std::ops::{Add, AddAssign};
use std::time::Duration;

/// A point on a scheduler's scaled timeline.
///
/// Instants from the same scheduler are totally ordered and may be
/// compared and subtracted; the timeline starts at
/// [`ScaledInstant::ZERO`] when the scheduler initializes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaledInstant(Duration);

impl ScaledInstant {
    /// The start of the timeline.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// An instant `elapsed` after the start of the timeline.
    #[must_use]
    pub const fn from_start(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    /// Scaled time elapsed since the start of the timeline.
    #[must_use]
    pub const fn since_start(self) -> Duration {
        self.0
    }

    /// Scaled time since `earlier`, saturating to zero if `earlier` is
    /// actually later.
    #[must_use]
    pub fn saturating_since(self, earlier: Self) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Duration> for ScaledInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl AddAssign<Duration> for ScaledInstant {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs;
    }
}

/// A countdown over scaled time.
///
/// Created unarmed. [`Clock::set`] arms it with a deadline of
/// `now + duration`; [`Clock::elapsed`] is a pure observation that
/// never rearms - after a deadline passes, `elapsed` keeps returning
/// true until `set` is called again. An unarmed clock never elapses.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    deadline: Option<ScaledInstant>,
}

impl Clock {
    /// Creates an unarmed clock.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Creates a clock already armed for `duration` from `now`.
    #[must_use]
    pub fn armed(now: ScaledInstant, duration: Duration) -> Self {
        Self {
            deadline: Some(now + duration),
        }
    }

    /// Arms (or rearms) the clock: the deadline becomes
    /// `now + duration`.
    pub fn set(&mut self, now: ScaledInstant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    /// True iff the clock is armed and `now` has reached the deadline.
    /// Idempotent; does not rearm.
    #[must_use]
    pub fn elapsed(&self, now: ScaledInstant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// True if a deadline is set.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops the deadline; the clock reads unarmed again.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Scaled time left until the deadline (zero once reached), or
    /// None when unarmed.
    #[must_use]
    pub fn remaining(&self, now: ScaledInstant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_unarmed_never_elapses() {
        let clock = Clock::new();
        assert!(!clock.is_armed());
        assert!(!clock.elapsed(ScaledInstant::from_start(Duration::from_secs(100))));
        assert_eq!(clock.remaining(ScaledInstant::ZERO), None);
    }

    #[test]
    fn test_elapsed_at_boundary() {
        let mut clock = Clock::new();
        clock.set(ScaledInstant::ZERO, 1000 * MS);

        assert!(!clock.elapsed(ScaledInstant::from_start(999 * MS)));
        assert!(clock.elapsed(ScaledInstant::from_start(1000 * MS)));
        assert!(clock.elapsed(ScaledInstant::from_start(1001 * MS)));
    }

    #[test]
    fn test_elapsed_is_idempotent() {
        let clock = Clock::armed(ScaledInstant::ZERO, 10 * MS);
        let now = ScaledInstant::from_start(20 * MS);

        assert!(clock.elapsed(now));
        // Observation does not rearm.
        assert!(clock.elapsed(now));
        assert_eq!(clock.remaining(now), Some(Duration::ZERO));
    }

    #[test]
    fn test_rearm_pushes_deadline() {
        let mut clock = Clock::armed(ScaledInstant::ZERO, 10 * MS);
        let now = ScaledInstant::from_start(10 * MS);
        assert!(clock.elapsed(now));

        clock.set(now, 10 * MS);
        assert!(!clock.elapsed(now));
        assert!(clock.elapsed(ScaledInstant::from_start(20 * MS)));
    }

    #[test]
    fn test_disarm() {
        let mut clock = Clock::armed(ScaledInstant::ZERO, MS);
        clock.disarm();
        assert!(!clock.elapsed(ScaledInstant::from_start(Duration::from_secs(1))));
    }

    #[test]
    fn test_remaining_counts_down() {
        let clock = Clock::armed(ScaledInstant::ZERO, 100 * MS);
        assert_eq!(clock.remaining(ScaledInstant::from_start(40 * MS)), Some(60 * MS));
    }

    #[test]
    fn test_instant_ordering() {
        let a = ScaledInstant::from_start(MS);
        let b = ScaledInstant::from_start(2 * MS);
        assert!(a < b);
        assert_eq!(b.saturating_since(a), MS);
        assert_eq!(a.saturating_since(b), Duration::ZERO);
    }
}
