use std::time::Duration;

use rota_core::alert::Alert;
use rota_ports::outbound::AlertSource;
use rota_ports::types::AlertQuery;

use crate::error::{AppError, Step};
use crate::remote;

pub const DEFAULT_ALERT_LIMIT: u32 = 20;

pub struct AlertService<A>
where
    A: AlertSource,
{
    alerts: A,
    call_timeout: Duration,
}

impl<A> AlertService<A>
where
    A: AlertSource,
{
    pub fn new(alerts: A, call_timeout: Duration) -> Self {
        Self {
            alerts,
            call_timeout,
        }
    }

    /// Open alerts the team responds to, sorted by creation time.
    pub async fn list_alerts(&self, team: &str, limit: u32) -> Result<Vec<Alert>, AppError> {
        let query = AlertQuery::open_for_team(team, limit);
        let records = remote::call(
            Step::ListAlerts,
            team,
            self.call_timeout,
            self.alerts.list_alerts(&query),
        )
        .await?;

        Ok(records
            .into_iter()
            .map(|r| {
                Alert::new(
                    r.id,
                    r.created_at,
                    r.message,
                    r.priority,
                    r.acknowledged,
                    r.owner,
                )
            })
            .collect())
    }
}
