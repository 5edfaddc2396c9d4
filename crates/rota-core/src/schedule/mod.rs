pub mod period;
pub mod roster;

use serde::Serialize;

use crate::error::DomainError;
use crate::escalation::EscalationDelay;

pub use period::{Occupant, OnCallUser, Period};
pub use roster::RosterMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    Flat(Vec<Period>),
    Split {
        current: Vec<Period>,
        next: Vec<Period>,
    },
}

impl Occupancy {
    pub fn periods(&self) -> impl Iterator<Item = &Period> {
        let (first, second) = match self {
            Self::Flat(periods) => (periods.as_slice(), Default::default()),
            Self::Split { current, next } => (current.as_slice(), next.as_slice()),
        };
        first.iter().chain(second.iter())
    }

    pub fn periods_mut(&mut self) -> impl Iterator<Item = &mut Period> {
        let (first, second) = match self {
            Self::Flat(periods) => (periods.as_mut_slice(), Default::default()),
            Self::Split { current, next } => (current.as_mut_slice(), next.as_mut_slice()),
        };
        first.iter_mut().chain(second.iter_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.periods().next().is_none()
    }
}

/// One escalation tier: the schedule notified after `delay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    name: String,
    delay: EscalationDelay,
    occupancy: Occupancy,
}

impl Schedule {
    pub fn new(
        name: String,
        delay: EscalationDelay,
        occupancy: Occupancy,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyScheduleName);
        }
        Ok(Self {
            name,
            delay,
            occupancy,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn delay(&self) -> EscalationDelay {
        self.delay
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn occupancy_mut(&mut self) -> &mut Occupancy {
        &mut self.occupancy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escalation::TimeUnit;
    use crate::ids::UserId;
    use chrono::{DateTime, Duration, Utc};

    fn now() -> DateTime<Utc> {
        chrono::DateTime::parse_from_rfc3339("2025-01-15T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn period(from_h: i64, to_h: i64, who: &str) -> Period {
        Period::new(
            now() + Duration::hours(from_h),
            now() + Duration::hours(to_h),
            Occupant::new(UserId::new(who), who.into()),
        )
        .unwrap()
    }

    #[test]
    fn schedule_requires_name() {
        let result = Schedule::new(
            "  ".into(),
            EscalationDelay::new(0, TimeUnit::Minutes),
            Occupancy::Flat(vec![]),
        );
        assert_eq!(result, Err(DomainError::EmptyScheduleName));
    }

    #[test]
    fn split_periods_iterate_current_then_next() {
        let occupancy = Occupancy::Split {
            current: vec![period(-1, 1, "a")],
            next: vec![period(1, 2, "b")],
        };
        let ids: Vec<_> = occupancy
            .periods()
            .map(|p| p.occupant().id().as_str())
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn periods_mut_reaches_every_period() {
        let mut occupancy = Occupancy::Split {
            current: vec![period(-1, 1, "a")],
            next: vec![period(1, 2, "b"), period(2, 3, "b")],
        };
        for p in occupancy.periods_mut() {
            p.occupant_mut().set_employee_id("1".into());
        }
        assert!(occupancy
            .periods()
            .all(|p| p.occupant().employee_id() == Some("1")));
    }

    #[test]
    fn empty_occupancy() {
        assert!(Occupancy::Flat(vec![]).is_empty());
        assert!(Occupancy::Split {
            current: vec![],
            next: vec![]
        }
        .is_empty());
        assert!(!Occupancy::Flat(vec![period(0, 1, "a")]).is_empty());
    }
}
