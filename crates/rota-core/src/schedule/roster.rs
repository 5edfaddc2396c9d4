use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Occupancy, Period};
use crate::ids::UserId;

/// Upper bound of distinct occupants kept by [`RosterMode::CurrentNext`].
pub const MAX_OCCUPANTS: usize = 2;

/// How the periods of a tier are shaped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RosterMode {
    /// Every period that has not ended yet, in input order.
    Flat,
    /// The current occupant and the next one, split by whether they started.
    #[default]
    CurrentNext,
}

impl RosterMode {
    pub fn apply(&self, periods: Vec<Period>, now: DateTime<Utc>) -> Occupancy {
        match self {
            Self::Flat => Occupancy::Flat(active_periods(periods, now)),
            Self::CurrentNext => current_and_next(periods, now),
        }
    }
}

pub fn active_periods(periods: Vec<Period>, now: DateTime<Utc>) -> Vec<Period> {
    periods.into_iter().filter(|p| !p.has_ended(now)).collect()
}

/// Buckets the periods touching at most [`MAX_OCCUPANTS`] distinct occupants
/// into `current` (already started) and `next`.
///
/// Periods may come from several rotations, so they are ordered by start
/// first. Fragments of the same occupant are kept as they are.
pub fn current_and_next(mut periods: Vec<Period>, now: DateTime<Utc>) -> Occupancy {
    periods.sort_by_key(|p| p.starts());

    let mut seen: HashSet<UserId> = HashSet::with_capacity(MAX_OCCUPANTS);
    let mut current = vec![];
    let mut next = vec![];

    for period in periods {
        if period.has_ended(now) {
            continue;
        }

        if !seen.contains(period.occupant().id()) {
            if seen.len() == MAX_OCCUPANTS {
                break;
            }
            seen.insert(period.occupant().id().clone());
        }

        if period.has_started(now) {
            current.push(period);
        } else {
            next.push(period);
        }
    }

    Occupancy::Split { current, next }
}
