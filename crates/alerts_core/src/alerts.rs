//! Alert-domain types and action gates.
//!
//! The alert workflow itself is dialog-driven and lives in the UI crate;
//! this module holds the types the workflow is described in and the one
//! decision that does not depend on a dialog answer: whether a send/delete
//! run may start at all.

use thiserror::Error;

use crate::progress::ProgressCounter;

/// Day of the week an alert batch is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDay {
    Monday,
    Friday,
}

impl std::fmt::Display for AlertDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertDay::Monday => write!(f, "Monday"),
            AlertDay::Friday => write!(f, "Friday"),
        }
    }
}

/// Which of the two draining actions was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainKind {
    /// Send all created alerts.
    Send,
    /// Delete all created alerts.
    Delete,
}

impl DrainKind {
    /// Lowercase verb for message text ("send", "delete").
    pub fn verb(self) -> &'static str {
        match self {
            DrainKind::Send => "send",
            DrainKind::Delete => "delete",
        }
    }
}

impl std::fmt::Display for DrainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrainKind::Send => write!(f, "Send"),
            DrainKind::Delete => write!(f, "Delete"),
        }
    }
}

/// Error returned when a drain action's precondition does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    /// The counter is at zero, so there is nothing to send or delete.
    #[error("there are no alerts to {}", .0.verb())]
    NothingToDrain(DrainKind),
}

/// Check whether a send/delete run may start.
///
/// Draining requires created alerts, i.e. a counter above zero. The check
/// never mutates the counter; refused actions are a no-op.
pub fn check_drain(counter: &ProgressCounter, kind: DrainKind) -> Result<(), GateError> {
    if counter.value() == 0 {
        Err(GateError::NothingToDrain(kind))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_refused_at_zero() {
        let counter = ProgressCounter::new();
        assert_eq!(
            check_drain(&counter, DrainKind::Send),
            Err(GateError::NothingToDrain(DrainKind::Send))
        );
        assert_eq!(
            check_drain(&counter, DrainKind::Delete),
            Err(GateError::NothingToDrain(DrainKind::Delete))
        );
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn drain_allowed_above_zero() {
        let mut counter = ProgressCounter::new();
        counter.start_increment().unwrap();
        counter.tick();
        counter.halt();
        assert_eq!(counter.value(), 1);

        assert_eq!(check_drain(&counter, DrainKind::Send), Ok(()));
        assert_eq!(check_drain(&counter, DrainKind::Delete), Ok(()));
    }

    #[test]
    fn gate_error_names_the_action() {
        let err = GateError::NothingToDrain(DrainKind::Delete);
        assert_eq!(err.to_string(), "there are no alerts to delete");
    }

    #[test]
    fn display_forms() {
        assert_eq!(AlertDay::Monday.to_string(), "Monday");
        assert_eq!(AlertDay::Friday.to_string(), "Friday");
        assert_eq!(DrainKind::Send.to_string(), "Send");
        assert_eq!(DrainKind::Delete.verb(), "delete");
    }
}
