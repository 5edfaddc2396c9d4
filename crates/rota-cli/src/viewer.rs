use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use rota_app::alert_service::AlertService;
use rota_app::error::AppError;
use rota_app::roster_service::{RosterOptions, RosterService};
use rota_core::alert::Alert;
use rota_core::escalation::Escalation;
use rota_ports::outbound::{
    AlertSource, EscalationSource, ScheduleSource, TeamDirectory, UserDirectory,
};

/// Everything shown for one team.
#[derive(Debug, Serialize)]
pub struct TeamReport {
    pub team: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Resolved {
        escalation: Escalation,
        alerts: Vec<Alert>,
    },
    Failed {
        error: String,
    },
}

impl TeamReport {
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

/// Resolves the configured teams one after another against a single
/// platform client.
pub struct Viewer<P>
where
    P: TeamDirectory + EscalationSource + ScheduleSource + UserDirectory + AlertSource + Clone,
{
    roster: RosterService<P, P, P, P>,
    alerts: AlertService<P>,
    weeks: u32,
    alert_limit: u32,
}

impl<P> Viewer<P>
where
    P: TeamDirectory + EscalationSource + ScheduleSource + UserDirectory + AlertSource + Clone,
{
    pub fn new(platform: P, options: RosterOptions, weeks: u32, alert_limit: u32) -> Self {
        let alerts = AlertService::new(platform.clone(), options.call_timeout);
        let roster = RosterService::new(
            platform.clone(),
            platform.clone(),
            platform.clone(),
            platform,
            options,
        );
        Self {
            roster,
            alerts,
            weeks,
            alert_limit,
        }
    }

    /// A failing team is reported and does not stop the others.
    pub async fn report_all(&self, teams: &[String], now: DateTime<Utc>) -> Vec<TeamReport> {
        let mut reports = Vec::with_capacity(teams.len());
        for team in teams {
            reports.push(self.report(team, now).await);
        }
        reports
    }

    pub async fn report(&self, team: &str, now: DateTime<Utc>) -> TeamReport {
        let outcome = match self.resolve(team, now).await {
            Ok((escalation, alerts)) => {
                info!(
                    team,
                    tiers = escalation.schedules().len(),
                    alerts = alerts.len(),
                    "team resolved"
                );
                Outcome::Resolved { escalation, alerts }
            }
            Err(e) => {
                warn!(team, error = %e, "team skipped");
                Outcome::Failed {
                    error: e.to_string(),
                }
            }
        };
        TeamReport {
            team: team.to_string(),
            outcome,
        }
    }

    async fn resolve(
        &self,
        team: &str,
        now: DateTime<Utc>,
    ) -> Result<(Escalation, Vec<Alert>), AppError> {
        let escalation = self.roster.resolve_schedule(team, self.weeks, now).await?;
        let alerts = if self.alert_limit == 0 {
            vec![]
        } else {
            self.alerts.list_alerts(team, self.alert_limit).await?
        };
        Ok((escalation, alerts))
    }
}
