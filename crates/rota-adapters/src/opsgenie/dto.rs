use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use rota_core::ids::{AlertId, ScheduleId};
use rota_ports::types::{
    AlertRecord, EscalationRecord, EscalationRule, RawDelay, Recipient, RoutingRule, Timeline,
    TimelinePeriod, TimelineRotation, UserProfile,
};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipientDto {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
}

impl From<RecipientDto> for Recipient {
    fn from(dto: RecipientDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            kind: dto.kind,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoutingRuleDto {
    #[serde(default)]
    name: String,
    notify: RecipientDto,
}

impl From<RoutingRuleDto> for RoutingRule {
    fn from(dto: RoutingRuleDto) -> Self {
        Self {
            name: dto.name,
            notify: dto.notify.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DelayDto {
    time_amount: u32,
    time_unit: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EscalationRuleDto {
    delay: DelayDto,
    recipient: RecipientDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EscalationDto {
    #[serde(default)]
    name: String,
    #[serde(default)]
    rules: Vec<EscalationRuleDto>,
}

impl From<EscalationDto> for EscalationRecord {
    fn from(dto: EscalationDto) -> Self {
        Self {
            name: dto.name,
            rules: dto
                .rules
                .into_iter()
                .map(|r| EscalationRule {
                    delay: RawDelay {
                        amount: r.delay.time_amount,
                        unit: r.delay.time_unit,
                    },
                    schedule: ScheduleId::new(r.recipient.id),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PeriodDto {
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    recipient: RecipientDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RotationDto {
    #[serde(default)]
    name: String,
    #[serde(default)]
    periods: Vec<PeriodDto>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FinalTimelineDto {
    #[serde(default)]
    rotations: Vec<RotationDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleInfoDto {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TimelineDto {
    #[serde(rename = "_parent")]
    parent: ScheduleInfoDto,
    #[serde(default)]
    final_timeline: FinalTimelineDto,
}

impl From<TimelineDto> for Timeline {
    fn from(dto: TimelineDto) -> Self {
        Self {
            schedule_id: ScheduleId::new(dto.parent.id),
            schedule_name: dto.parent.name,
            rotations: dto
                .final_timeline
                .rotations
                .into_iter()
                .map(|r| TimelineRotation {
                    name: r.name,
                    periods: r
                        .periods
                        .into_iter()
                        .map(|p| TimelinePeriod {
                            start: p.start_date,
                            end: p.end_date,
                            recipient: p.recipient.into(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserDto {
    #[serde(default)]
    details: BTreeMap<String, Vec<String>>,
}

impl From<UserDto> for UserProfile {
    fn from(dto: UserDto) -> Self {
        Self {
            details: dto.details,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AlertDto {
    id: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    priority: String,
    #[serde(default)]
    acknowledged: bool,
    #[serde(default)]
    owner: String,
}

impl From<AlertDto> for AlertRecord {
    fn from(dto: AlertDto) -> Self {
        Self {
            id: AlertId::new(dto.id),
            created_at: dto.created_at,
            message: dto.message,
            priority: dto.priority,
            acknowledged: dto.acknowledged,
            owner: dto.owner,
        }
    }
}
