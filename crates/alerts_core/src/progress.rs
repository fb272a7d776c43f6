//! The progress counter state machine.
//!
//! The counter simulates the progress of a long-running operation by moving
//! a bounded value toward a terminal bound, one step per timer tick. Unlike
//! a self-rescheduling callback, the counter does not own a timer: the
//! caller arms one while [`ProgressCounter::is_running`] holds and feeds
//! each firing to [`ProgressCounter::tick`]. That keeps start/stop control
//! explicit and makes the whole protocol testable without an event loop.

use std::time::Duration;

use thiserror::Error;

/// Lower bound of the counter range.
pub const COUNTER_MIN: u8 = 0;

/// Upper bound of the counter range.
pub const COUNTER_MAX: u8 = 100;

/// Nominal delay between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Direction of a counter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advancing toward 100.
    Incrementing,
    /// Advancing toward 0.
    Decrementing,
}

impl Direction {
    /// The value at which a run in this direction halts.
    pub fn terminal_bound(self) -> u8 {
        match self {
            Direction::Incrementing => COUNTER_MAX,
            Direction::Decrementing => COUNTER_MIN,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Incrementing => write!(f, "incrementing"),
            Direction::Decrementing => write!(f, "decrementing"),
        }
    }
}

/// Whether the counter is currently advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Not advancing; ticks are ignored.
    #[default]
    Halted,
    /// Advancing in the given direction on every tick.
    Running(Direction),
}

/// Error returned when a run cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A run is already in flight; the counter refuses a second one rather
    /// than letting two runs race on the same value.
    #[error("a counter run is already in progress")]
    RunInProgress,
}

/// Outcome of a single tick while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The value moved one step; the run continues.
    Advanced(u8),
    /// The value reached its terminal bound; the run has halted.
    Completed(u8),
}

/// Bounded counter in `[0, 100]` advanced by externally driven ticks.
///
/// One instance lives in the application state for the whole process
/// lifetime. Initial state: `value = 0`, halted.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    value: u8,
    state: RunState,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value, always in `[0, 100]`.
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running(_))
    }

    /// Direction of the run in flight, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            RunState::Running(direction) => Some(direction),
            RunState::Halted => None,
        }
    }

    /// Begin a run toward the direction's terminal bound.
    ///
    /// The value itself is untouched until the first [`tick`](Self::tick).
    pub fn start(&mut self, direction: Direction) -> Result<(), StartError> {
        if self.is_running() {
            return Err(StartError::RunInProgress);
        }
        self.state = RunState::Running(direction);
        Ok(())
    }

    /// Begin an upward run. See [`start`](Self::start).
    pub fn start_increment(&mut self) -> Result<(), StartError> {
        self.start(Direction::Incrementing)
    }

    /// Begin a downward run. See [`start`](Self::start).
    pub fn start_decrement(&mut self) -> Result<(), StartError> {
        self.start(Direction::Decrementing)
    }

    /// Advance one step.
    ///
    /// A tick that starts from the direction's own terminal bound wraps to
    /// the opposite bound before stepping, so a fresh run from 100 yields 1
    /// (not 101) and a fresh downward run from 0 yields 99. Reaching the
    /// terminal bound halts the run and reports [`TickEvent::Completed`]
    /// exactly once.
    ///
    /// Returns `None` while halted, so a stale timer firing after
    /// completion is harmless.
    pub fn tick(&mut self) -> Option<TickEvent> {
        let direction = self.direction()?;

        match direction {
            Direction::Incrementing => {
                if self.value == COUNTER_MAX {
                    self.value = COUNTER_MIN;
                }
                self.value += 1;
            }
            Direction::Decrementing => {
                if self.value == COUNTER_MIN {
                    self.value = COUNTER_MAX;
                }
                self.value -= 1;
            }
        }

        if self.value == direction.terminal_bound() {
            self.state = RunState::Halted;
            Some(TickEvent::Completed(self.value))
        } else {
            Some(TickEvent::Advanced(self.value))
        }
    }

    /// Stop the run in flight without a completion event.
    ///
    /// The original program had no way to stop a run before its bound; this
    /// is the explicit cancellation point. No-op while halted.
    pub fn halt(&mut self) {
        self.state = RunState::Halted;
    }
}
