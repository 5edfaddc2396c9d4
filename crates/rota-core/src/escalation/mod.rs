pub mod delay;

use serde::Serialize;

use crate::schedule::Schedule;

pub use delay::{normalize_delay, EscalationDelay, TimeUnit};

/// Resolved escalation of a team: one schedule per tier, in trigger order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Escalation {
    name: String,
    schedules: Vec<Schedule>,
}

impl Escalation {
    pub fn new(name: String) -> Self {
        Self {
            name,
            schedules: vec![],
        }
    }

    pub fn push_tier(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }
}
