use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};

use rota_core::ids::ScheduleId;
use rota_ports::error::PortError;
use rota_ports::outbound::ScheduleSource;
use rota_ports::types::Timeline;

use super::dto::TimelineDto;
use super::OpsGenieClient;

#[async_trait]
impl ScheduleSource for OpsGenieClient {
    async fn get_timeline(
        &self,
        id: &ScheduleId,
        weeks: u32,
        from: DateTime<Utc>,
    ) -> Result<Timeline, PortError> {
        let url = self.endpoint(&["v2", "schedules", id.as_str(), "timeline"]);
        let query = [
            ("identifierType", "id".to_string()),
            ("interval", weeks.to_string()),
            ("intervalUnit", "weeks".to_string()),
            ("date", from.to_rfc3339_opts(SecondsFormat::Secs, true)),
        ];

        let timeline: TimelineDto = self.get(url, &query).await?;
        Ok(timeline.into())
    }
}
