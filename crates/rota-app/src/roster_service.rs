use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use rota_core::escalation::{normalize_delay, Escalation};
use rota_core::ids::UserId;
use rota_core::schedule::{Occupancy, Occupant, Period, RosterMode, Schedule};
use rota_ports::outbound::{EscalationSource, ScheduleSource, TeamDirectory, UserDirectory};
use rota_ports::types::{EscalationRule, TeamRef, Timeline};

use crate::error::{AppError, Step};
use crate::remote;

pub const DEFAULT_WINDOW_WEEKS: u32 = 3;
pub const DEFAULT_EMPLOYEE_ID_KEY: &str = "employeenumber";
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct RosterOptions {
    pub mode: RosterMode,
    /// Look up each occupant's profile for the employee number.
    pub enrich: bool,
    pub employee_id_key: String,
    pub call_timeout: Duration,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            mode: RosterMode::default(),
            enrich: true,
            employee_id_key: DEFAULT_EMPLOYEE_ID_KEY.to_string(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

pub struct RosterService<T, E, S, U>
where
    T: TeamDirectory,
    E: EscalationSource,
    S: ScheduleSource,
    U: UserDirectory,
{
    teams: T,
    escalations: E,
    schedules: S,
    users: U,
    options: RosterOptions,
}

impl<T, E, S, U> RosterService<T, E, S, U>
where
    T: TeamDirectory,
    E: EscalationSource,
    S: ScheduleSource,
    U: UserDirectory,
{
    pub fn new(teams: T, escalations: E, schedules: S, users: U, options: RosterOptions) -> Self {
        Self {
            teams,
            escalations,
            schedules,
            users,
            options,
        }
    }

    /// Resolves who is on call at every tier of the team's escalation,
    /// looking `window_weeks` ahead of `now`.
    ///
    /// Only the first routing rule of the team is followed. Any failing
    /// remote call aborts the whole resolution.
    pub async fn resolve_schedule(
        &self,
        team: &str,
        window_weeks: u32,
        now: DateTime<Utc>,
    ) -> Result<Escalation, AppError> {
        let deadline = self.options.call_timeout;

        let rules = remote::call(
            Step::ListRoutingRules,
            team,
            deadline,
            self.teams.list_routing_rules(&TeamRef::Name(team.to_string())),
        )
        .await?;

        let Some(routing_rule) = rules.first() else {
            return Err(AppError::NoRoutingRules {
                team: team.to_string(),
            });
        };
        if rules.len() > 1 {
            debug!(
                team,
                count = rules.len(),
                rule = %routing_rule.name,
                "following first routing rule"
            );
        }

        let Some(escalation_id) = routing_rule.escalation() else {
            return Err(AppError::NoEscalation {
                team: team.to_string(),
                rule: routing_rule.name.clone(),
            });
        };

        let record = remote::call(
            Step::GetEscalation,
            &escalation_id,
            deadline,
            self.escalations.get_escalation(&escalation_id),
        )
        .await?;

        if record.rules.is_empty() {
            return Err(AppError::NoEscalationRules {
                escalation: record.name,
            });
        }

        let mut escalation = Escalation::new(record.name);
        let mut profiles = HashMap::new();
        for rule in &record.rules {
            let mut schedule = self.resolve_tier(rule, window_weeks, now).await?;
            if self.options.enrich {
                self.enrich(schedule.occupancy_mut(), &mut profiles).await?;
            }
            escalation.push_tier(schedule);
        }

        debug!(team, tiers = escalation.schedules().len(), "roster resolved");
        Ok(escalation)
    }

    async fn resolve_tier(
        &self,
        rule: &EscalationRule,
        window_weeks: u32,
        now: DateTime<Utc>,
    ) -> Result<Schedule, AppError> {
        let timeline = remote::call(
            Step::GetTimeline,
            &rule.schedule,
            self.options.call_timeout,
            self.schedules.get_timeline(&rule.schedule, window_weeks, now),
        )
        .await?;

        let delay = normalize_delay(rule.delay.amount, &rule.delay.unit)?;
        let periods = collect_periods(&timeline);
        let occupancy = self.options.mode.apply(periods, now);

        Ok(Schedule::new(timeline.schedule_name, delay, occupancy)?)
    }

    /// Attaches employee numbers; each occupant is looked up once per
    /// resolution.
    async fn enrich(
        &self,
        occupancy: &mut Occupancy,
        profiles: &mut HashMap<UserId, Option<String>>,
    ) -> Result<(), AppError> {
        for period in occupancy.periods_mut() {
            let id = period.occupant().id().clone();
            if id.is_empty() {
                continue;
            }

            let employee_id = match profiles.get(&id) {
                Some(cached) => cached.clone(),
                None => {
                    let profile = remote::call(
                        Step::GetUser,
                        &id,
                        self.options.call_timeout,
                        self.users.get_user(&id),
                    )
                    .await?;
                    let value = profile
                        .single_detail(&self.options.employee_id_key)
                        .map(str::to_string);
                    profiles.insert(id, value.clone());
                    value
                }
            };

            if let Some(employee_id) = employee_id {
                period.occupant_mut().set_employee_id(employee_id);
            }
        }
        Ok(())
    }
}

fn collect_periods(timeline: &Timeline) -> Vec<Period> {
    let mut periods = vec![];
    for rotation in &timeline.rotations {
        for p in &rotation.periods {
            let occupant = Occupant::new(
                UserId::new(p.recipient.id.as_str()),
                p.recipient.name.clone(),
            );
            match Period::new(p.start, p.end, occupant) {
                Ok(period) => periods.push(period),
                Err(e) => warn!(
                    schedule = %timeline.schedule_id,
                    rotation = %rotation.name,
                    start = %p.start,
                    end = %p.end,
                    error = %e,
                    "skipping period"
                ),
            }
        }
    }
    periods
}
