use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    id: UserId,
    name: String,
    employee_id: Option<String>,
}

impl Occupant {
    pub fn new(id: UserId, name: String) -> Self {
        Self {
            id,
            name,
            employee_id: None,
        }
    }

    pub fn set_employee_id(&mut self, employee_id: String) {
        self.employee_id = Some(employee_id);
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display identity, usually the user's e-mail address.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }
}

/// One contiguous interval during which a single occupant is on call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    starts: DateTime<Utc>,
    ends: DateTime<Utc>,
    occupant: Occupant,
}

impl Period {
    pub fn new(
        starts: DateTime<Utc>,
        ends: DateTime<Utc>,
        occupant: Occupant,
    ) -> Result<Self, DomainError> {
        if ends <= starts {
            return Err(DomainError::InvalidPeriod);
        }
        Ok(Self {
            starts,
            ends,
            occupant,
        })
    }

    pub fn starts(&self) -> DateTime<Utc> {
        self.starts
    }

    pub fn ends(&self) -> DateTime<Utc> {
        self.ends
    }

    pub fn occupant(&self) -> &Occupant {
        &self.occupant
    }

    pub fn occupant_mut(&mut self) -> &mut Occupant {
        &mut self.occupant
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.ends < now
    }

    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.starts <= now
    }

    pub fn on_call_user(&self) -> OnCallUser {
        OnCallUser {
            name: self.occupant.name.clone(),
            employee_id: self.occupant.employee_id.clone(),
            starts: self.starts,
            ends: self.ends,
        }
    }
}

/// Flattened view of a period used for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnCallUser {
    pub name: String,
    pub employee_id: Option<String>,
    pub starts: DateTime<Utc>,
    pub ends: DateTime<Utc>,
}
