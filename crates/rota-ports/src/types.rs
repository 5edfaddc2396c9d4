use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rota_core::ids::{AlertId, EscalationId, ScheduleId, TeamId};

/// How a team is addressed on the remote platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamRef {
    Id(TeamId),
    Name(String),
}

impl fmt::Display for TeamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Team-level rule routing incoming alerts to a responder.
#[derive(Debug, Clone)]
pub struct RoutingRule {
    pub name: String,
    pub notify: Recipient,
}

impl RoutingRule {
    /// Escalation the rule notifies; `None` for rules that notify nobody
    /// or a schedule directly.
    pub fn escalation(&self) -> Option<EscalationId> {
        if self.notify.kind == "escalation" && !self.notify.id.is_empty() {
            Some(EscalationId::new(self.notify.id.as_str()))
        } else {
            None
        }
    }
}

/// Responder referenced by an escalation rule or a timeline period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub id: String,
    pub name: String,
    pub kind: String,
}

/// Delay as sent by the platform, before unit validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDelay {
    pub amount: u32,
    pub unit: String,
}

#[derive(Debug, Clone)]
pub struct EscalationRule {
    pub delay: RawDelay,
    pub schedule: ScheduleId,
}

#[derive(Debug, Clone)]
pub struct EscalationRecord {
    pub name: String,
    pub rules: Vec<EscalationRule>,
}

#[derive(Debug, Clone)]
pub struct TimelinePeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub recipient: Recipient,
}

#[derive(Debug, Clone)]
pub struct TimelineRotation {
    pub name: String,
    pub periods: Vec<TimelinePeriod>,
}

/// Final timeline of a schedule over the requested window.
#[derive(Debug, Clone)]
pub struct Timeline {
    pub schedule_id: ScheduleId,
    pub schedule_name: String,
    pub rotations: Vec<TimelineRotation>,
}

#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    pub details: BTreeMap<String, Vec<String>>,
}

impl UserProfile {
    /// Value of a custom detail, only when it holds exactly one entry.
    pub fn single_detail(&self, key: &str) -> Option<&str> {
        match self.details.get(key).map(Vec::as_slice) {
            Some([value]) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Search parameters for listing alerts, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertQuery {
    pub query: String,
    pub limit: u32,
}

impl AlertQuery {
    pub fn open_for_team(team: &str, limit: u32) -> Self {
        Self {
            query: format!(r#"status:open AND responders: "{}""#, quote(team)),
            limit,
        }
    }
}

/// Escapes a value for use inside a double-quoted search term.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}

/// Alert as returned by the platform.
#[derive(Debug, Clone)]
pub struct AlertRecord {
    pub id: AlertId,
    pub created_at: DateTime<Utc>,
    pub message: String,
    pub priority: String,
    pub acknowledged: bool,
    pub owner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(values: &[&str]) -> UserProfile {
        UserProfile {
            details: BTreeMap::from([(
                "employeenumber".to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )]),
            ..Default::default()
        }
    }

    #[test]
    fn single_detail_requires_exactly_one_value() {
        assert_eq!(profile(&["4711"]).single_detail("employeenumber"), Some("4711"));
        assert_eq!(profile(&[]).single_detail("employeenumber"), None);
        assert_eq!(profile(&["1", "2"]).single_detail("employeenumber"), None);
        assert_eq!(profile(&["1"]).single_detail("other"), None);
    }

    #[test]
    fn open_alert_query_filters_on_responder() {
        let query = AlertQuery::open_for_team("SRE Core", 20);
        assert_eq!(query.query, r#"status:open AND responders: "SRE Core""#);
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn open_alert_query_escapes_quotes() {
        let query = AlertQuery::open_for_team(r#"ops "night" \ day"#, 5);
        assert_eq!(
            query.query,
            r#"status:open AND responders: "ops \"night\" \\ day""#
        );
    }

    fn rule(kind: &str, id: &str) -> RoutingRule {
        RoutingRule {
            name: "Default Routing Rule".into(),
            notify: Recipient {
                id: id.into(),
                name: String::new(),
                kind: kind.into(),
            },
        }
    }

    #[test]
    fn routing_rule_escalation_requires_escalation_target() {
        assert_eq!(
            rule("escalation", "esc-1").escalation(),
            Some(EscalationId::new("esc-1"))
        );
        assert_eq!(rule("escalation", "").escalation(), None);
        assert_eq!(rule("none", "").escalation(), None);
        assert_eq!(rule("schedule", "s-1").escalation(), None);
    }

    #[test]
    fn team_ref_displays_identifier() {
        assert_eq!(TeamRef::Name("sre".into()).to_string(), "sre");
        assert_eq!(TeamRef::Id(TeamId::new("t-1")).to_string(), "t-1");
    }
}
