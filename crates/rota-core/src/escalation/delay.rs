use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
}

impl TimeUnit {
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minutes => 60,
            Self::Hours => 3600,
        }
    }

    fn short(&self) -> &'static str {
        match self {
            Self::Minutes => "min",
            Self::Hours => "h",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minutes" => Ok(Self::Minutes),
            "hours" => Ok(Self::Hours),
            other => Err(DomainError::UnsupportedUnit(other.to_string())),
        }
    }
}

/// Time a tier waits after the previous one before it is notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationDelay {
    amount: u32,
    unit: TimeUnit,
}

impl EscalationDelay {
    pub fn new(amount: u32, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn seconds(&self) -> u64 {
        u64::from(self.amount) * self.unit.seconds()
    }

    pub fn duration(&self) -> Duration {
        // u32 * 3600 always fits in i64
        Duration::seconds(self.seconds() as i64)
    }
}

impl fmt::Display for EscalationDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit.short())
    }
}

/// Converts a remote `(amount, unit)` pair into a delay, rejecting units
/// outside [`TimeUnit`].
pub fn normalize_delay(amount: u32, unit: &str) -> Result<EscalationDelay, DomainError> {
    let unit = unit.parse::<TimeUnit>()?;
    Ok(EscalationDelay::new(amount, unit))
}
