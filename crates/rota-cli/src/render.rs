use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

use rota_core::alert::Alert;
use rota_core::escalation::Escalation;
use rota_core::schedule::{Occupancy, OnCallUser, Schedule};

use crate::viewer::{Outcome, TeamReport};

const TIME_FORMAT: &str = "%a %b %e %H:%M";

pub trait Renderer {
    fn render(&self, reports: &[TeamReport], out: &mut dyn Write) -> io::Result<()>;
}

/// Human readable roster, one block per team.
pub struct TextRenderer {
    tz: Option<Tz>,
}

impl TextRenderer {
    /// `None` renders times in the machine's local timezone.
    pub fn new(tz: Option<Tz>) -> Self {
        Self { tz }
    }

    fn time(&self, t: DateTime<Utc>) -> String {
        match self.tz {
            Some(tz) => t.with_timezone(&tz).format(TIME_FORMAT).to_string(),
            None => t.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        }
    }

    fn escalation(&self, escalation: &Escalation, out: &mut dyn Write) -> io::Result<()> {
        for schedule in escalation.schedules() {
            self.schedule(schedule, out)?;
        }
        Ok(())
    }

    fn schedule(&self, schedule: &Schedule, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  {}: {}", schedule.delay(), schedule.name())?;
        if schedule.occupancy().is_empty() {
            return writeln!(out, "    nobody on call");
        }

        match schedule.occupancy() {
            Occupancy::Flat(periods) => {
                for p in periods {
                    let user = p.on_call_user();
                    writeln!(
                        out,
                        "    {}  {} -> {}",
                        who(&user),
                        self.time(user.starts),
                        self.time(user.ends)
                    )?;
                }
            }
            Occupancy::Split { current, next } => {
                for p in current {
                    let user = p.on_call_user();
                    writeln!(out, "    {}  now -> {}", who(&user), self.time(user.ends))?;
                }
                for p in next {
                    let user = p.on_call_user();
                    writeln!(
                        out,
                        "    next: {}  {} -> {}",
                        who(&user),
                        self.time(user.starts),
                        self.time(user.ends)
                    )?;
                }
            }
        }
        Ok(())
    }

    fn alerts(&self, alerts: &[Alert], out: &mut dyn Write) -> io::Result<()> {
        if alerts.is_empty() {
            return Ok(());
        }
        writeln!(out, "  open alerts:")?;
        for alert in alerts {
            let state = if alert.is_acknowledged() {
                "acked"
            } else {
                "unacked"
            };
            write!(
                out,
                "    [{}] {}  ({}, {state}",
                alert.priority(),
                alert.message(),
                self.time(alert.created())
            )?;
            if !alert.owner().is_empty() {
                write!(out, ", {}", email_to_name(alert.owner()))?;
            }
            writeln!(out, ")")?;
        }
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render(&self, reports: &[TeamReport], out: &mut dyn Write) -> io::Result<()> {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            match &report.outcome {
                Outcome::Resolved { escalation, alerts } => {
                    writeln!(out, "{} ({})", report.team, escalation.name())?;
                    self.escalation(escalation, out)?;
                    self.alerts(alerts, out)?;
                }
                Outcome::Failed { error } => {
                    writeln!(out, "{}", report.team)?;
                    writeln!(out, "  error: {error}")?;
                }
            }
        }
        Ok(())
    }
}

/// Machine readable output, a JSON array with one object per team.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, reports: &[TeamReport], out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, reports)?;
        writeln!(out)
    }
}

fn who(user: &OnCallUser) -> String {
    let name = email_to_name(&user.name);
    match &user.employee_id {
        Some(id) => format!("{name} ({id})"),
        None => name,
    }
}

/// `jane.doe@example.com` -> `Jane Doe`
pub fn email_to_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split('.')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_core::escalation::{EscalationDelay, TimeUnit};
    use rota_core::ids::UserId;
    use rota_core::schedule::{Occupant, Period};

    fn ts(s: &str) -> DateTime<Utc> {
        chrono::DateTime::parse_from_rfc3339(s)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn period(user: &str, employee_id: Option<&str>, starts: &str, ends: &str) -> Period {
        let mut occupant = Occupant::new(UserId::new(user), format!("{user}@example.com"));
        if let Some(id) = employee_id {
            occupant.set_employee_id(id.to_string());
        }
        Period::new(ts(starts), ts(ends), occupant).unwrap()
    }

    fn resolved() -> TeamReport {
        let mut escalation = Escalation::new("sre_escalation".into());
        escalation.push_tier(
            Schedule::new(
                "sre_schedule".into(),
                EscalationDelay::new(0, TimeUnit::Minutes),
                Occupancy::Split {
                    current: vec![period(
                        "jane.doe",
                        Some("4711"),
                        "2025-01-13T09:00:00Z",
                        "2025-01-20T09:00:00Z",
                    )],
                    next: vec![period(
                        "john.roe",
                        None,
                        "2025-01-20T09:00:00Z",
                        "2025-01-27T09:00:00Z",
                    )],
                },
            )
            .unwrap(),
        );
        escalation.push_tier(
            Schedule::new(
                "managers".into(),
                EscalationDelay::new(1, TimeUnit::Hours),
                Occupancy::Split {
                    current: vec![],
                    next: vec![],
                },
            )
            .unwrap(),
        );

        let alert = Alert::new(
            "a-1".into(),
            ts("2025-01-15T09:30:00Z"),
            "db down".into(),
            "P1".into(),
            true,
            "jane.doe@example.com".into(),
        );

        TeamReport {
            team: "sre".into(),
            outcome: Outcome::Resolved {
                escalation,
                alerts: vec![alert],
            },
        }
    }

    fn failed() -> TeamReport {
        TeamReport {
            team: "ghost".into(),
            outcome: Outcome::Failed {
                error: "team ghost has no routing rules".into(),
            },
        }
    }

    fn render(renderer: &dyn Renderer, reports: &[TeamReport]) -> String {
        let mut out = Vec::new();
        renderer.render(reports, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn email_is_turned_into_a_name() {
        assert_eq!(email_to_name("jane.doe@example.com"), "Jane Doe");
        assert_eq!(email_to_name("ops"), "Ops");
        assert_eq!(email_to_name("a..b@x"), "A B");
        assert_eq!(email_to_name(""), "");
    }

    #[test]
    fn text_lists_tiers_with_current_and_next() {
        let text = render(&TextRenderer::new(Some(chrono_tz::UTC)), &[resolved()]);

        let expected = "\
sre (sre_escalation)
  0 min: sre_schedule
    Jane Doe (4711)  now -> Mon Jan 20 09:00
    next: John Roe  Mon Jan 20 09:00 -> Mon Jan 27 09:00
  1 h: managers
    nobody on call
  open alerts:
    [P1] db down  (Wed Jan 15 09:30, acked, Jane Doe)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn text_uses_configured_timezone() {
        let text = render(
            &TextRenderer::new(Some(chrono_tz::Europe::Zurich)),
            &[resolved()],
        );
        assert!(text.contains("now -> Mon Jan 20 10:00"));
    }

    #[test]
    fn text_flat_mode_lists_every_period() {
        let mut escalation = Escalation::new("esc".into());
        escalation.push_tier(
            Schedule::new(
                "weekly".into(),
                EscalationDelay::new(5, TimeUnit::Minutes),
                Occupancy::Flat(vec![
                    period("a", None, "2025-01-13T09:00:00Z", "2025-01-20T09:00:00Z"),
                    period("b", None, "2025-01-20T09:00:00Z", "2025-01-27T09:00:00Z"),
                ]),
            )
            .unwrap(),
        );
        let report = TeamReport {
            team: "sre".into(),
            outcome: Outcome::Resolved {
                escalation,
                alerts: vec![],
            },
        };

        let text = render(&TextRenderer::new(Some(chrono_tz::UTC)), &[report]);
        assert!(text.contains("  5 min: weekly\n"));
        assert!(text.contains("    A  Mon Jan 13 09:00 -> Mon Jan 20 09:00\n"));
        assert!(text.contains("    B  Mon Jan 20 09:00 -> Mon Jan 27 09:00\n"));
        assert!(!text.contains("open alerts"));
    }

    #[test]
    fn text_reports_failed_team_inline() {
        let text = render(&TextRenderer::new(None), &[failed(), resolved()]);
        assert!(text.starts_with("ghost\n  error: team ghost has no routing rules\n\nsre ("));
    }

    #[test]
    fn json_emits_one_object_per_team() {
        let json = render(&JsonRenderer, &[resolved(), failed()]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let teams = value.as_array().unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0]["team"], "sre");
        let tier = &teams[0]["resolved"]["escalation"]["schedules"][0];
        assert_eq!(tier["name"], "sre_schedule");
        assert_eq!(tier["occupancy"]["split"]["current"][0]["occupant"]["employee_id"], "4711");
        assert_eq!(teams[1]["failed"]["error"], "team ghost has no routing rules");
    }
}
