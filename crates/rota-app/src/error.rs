use std::fmt;
use std::time::Duration;

use rota_core::error::DomainError;
use rota_ports::error::PortError;
use thiserror::Error;

/// Remote capability a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ListRoutingRules,
    GetEscalation,
    GetTimeline,
    GetUser,
    ListAlerts,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ListRoutingRules => "list routing rules",
            Self::GetEscalation => "get escalation",
            Self::GetTimeline => "get timeline",
            Self::GetUser => "get user",
            Self::ListAlerts => "list alerts",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("team {team} has no routing rules")]
    NoRoutingRules { team: String },
    #[error("routing rule {rule} of team {team} does not notify an escalation")]
    NoEscalation { team: String, rule: String },
    #[error("escalation {escalation} has no rules")]
    NoEscalationRules { escalation: String },
    #[error("{step} ({target}): {source}")]
    Remote {
        step: Step,
        target: String,
        source: PortError,
    },
    #[error("{step} ({target}): timed out after {after:?}")]
    Timeout {
        step: Step,
        target: String,
        after: Duration,
    },
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoRoutingRules { .. }
                | Self::NoEscalation { .. }
                | Self::NoEscalationRules { .. }
                | Self::Remote {
                    source: PortError::NotFound,
                    ..
                }
        )
    }

    /// Step of the remote call that failed, if the failure came from one.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Remote { step, .. } | Self::Timeout { step, .. } => Some(*step),
            _ => None,
        }
    }
}
