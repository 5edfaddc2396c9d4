use async_trait::async_trait;
use chrono::{DateTime, Utc};

use rota_core::ids::{EscalationId, ScheduleId, UserId};

use crate::error::PortError;
use crate::types::{
    AlertQuery, AlertRecord, EscalationRecord, RoutingRule, TeamRef, Timeline, UserProfile,
};

#[async_trait]
pub trait TeamDirectory: Send + Sync {
    async fn list_routing_rules(&self, team: &TeamRef) -> Result<Vec<RoutingRule>, PortError>;
}

#[async_trait]
pub trait EscalationSource: Send + Sync {
    async fn get_escalation(&self, id: &EscalationId) -> Result<EscalationRecord, PortError>;
}

#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn get_timeline(
        &self,
        id: &ScheduleId,
        weeks: u32,
        from: DateTime<Utc>,
    ) -> Result<Timeline, PortError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user(&self, id: &UserId) -> Result<UserProfile, PortError>;
}

#[async_trait]
pub trait AlertSource: Send + Sync {
    async fn list_alerts(&self, query: &AlertQuery) -> Result<Vec<AlertRecord>, PortError>;
}
