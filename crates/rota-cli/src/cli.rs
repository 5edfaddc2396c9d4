use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use rota_app::alert_service::DEFAULT_ALERT_LIMIT;
use rota_app::roster_service::{RosterOptions, DEFAULT_EMPLOYEE_ID_KEY, DEFAULT_WINDOW_WEEKS};
use rota_core::schedule::RosterMode;

/// Show who is on call for your OpsGenie teams, and what is on fire.
#[derive(Debug, Parser)]
#[command(name = "oncall")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.config/oncall/config.yml)
    #[arg(long, env = "ONCALL_CONFIG")]
    pub config: Option<PathBuf>,

    /// How many weeks of the rotation timeline to look ahead
    #[arg(long, default_value_t = DEFAULT_WINDOW_WEEKS)]
    pub weeks: u32,

    /// Roster shape per escalation tier
    #[arg(long, value_enum, default_value_t = Mode::CurrentNext)]
    pub mode: Mode,

    /// Skip user profile lookups (no employee numbers)
    #[arg(long)]
    pub no_enrich: bool,

    /// Custom user detail holding the employee number
    #[arg(long, default_value = DEFAULT_EMPLOYEE_ID_KEY)]
    pub employee_id_key: String,

    /// Maximum open alerts per team, 0 disables the alert list
    #[arg(long, default_value_t = DEFAULT_ALERT_LIMIT)]
    pub alerts: u32,

    /// Deadline for each remote call, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Output::Text)]
    pub output: Output,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Current occupant and the next one
    CurrentNext,
    /// Every upcoming period
    Flat,
}

impl From<Mode> for RosterMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::CurrentNext => Self::CurrentNext,
            Mode::Flat => Self::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Output {
    Text,
    Json,
}

impl Cli {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn roster_options(&self) -> RosterOptions {
        RosterOptions {
            mode: self.mode.into(),
            enrich: !self.no_enrich,
            employee_id_key: self.employee_id_key.clone(),
            call_timeout: self.call_timeout(),
        }
    }
}
