use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::AlertId;

/// An open alert a team is responding to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    id: AlertId,
    created: DateTime<Utc>,
    message: String,
    priority: String,
    acknowledged: bool,
    owner: String,
}

impl Alert {
    pub fn new(
        id: AlertId,
        created: DateTime<Utc>,
        message: String,
        priority: String,
        acknowledged: bool,
        owner: String,
    ) -> Self {
        Self {
            id,
            created,
            message,
            priority,
            acknowledged,
            owner,
        }
    }

    pub fn id(&self) -> &AlertId {
        &self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Empty when nobody has taken ownership yet.
    pub fn owner(&self) -> &str {
        &self.owner
    }
}
