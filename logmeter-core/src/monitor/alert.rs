use chrono::{DateTime, Utc};

/// Direction of an alert state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Triggered,
    Reset,
}

/// Emitted when the alert flips state; quiet otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertTransition {
    pub kind: AlertKind,
    pub average: f64,
    pub at: DateTime<Utc>,
}

/// Level-triggered threshold alert over the trailing average.
///
/// No hysteresis band, no minimum duration: the state follows the predicate
/// `average > threshold` and a transition is reported only when it changes.
#[derive(Debug)]
pub struct Alert {
    threshold: f64,
    triggered: bool,
}

impl Alert {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            triggered: false,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Compare `average` against the threshold; strictly greater-than, so an
    /// average exactly at the threshold counts as quiet.
    pub fn evaluate(&mut self, average: f64, at: DateTime<Utc>) -> Option<AlertTransition> {
        let triggered = average > self.threshold;
        if triggered == self.triggered {
            return None;
        }
        self.triggered = triggered;

        let kind = if triggered {
            AlertKind::Triggered
        } else {
            AlertKind::Reset
        };

        Some(AlertTransition { kind, average, at })
    }
}
