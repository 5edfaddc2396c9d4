use async_trait::async_trait;

use rota_core::ids::EscalationId;
use rota_ports::error::PortError;
use rota_ports::outbound::EscalationSource;
use rota_ports::types::EscalationRecord;

use super::dto::EscalationDto;
use super::OpsGenieClient;

#[async_trait]
impl EscalationSource for OpsGenieClient {
    async fn get_escalation(&self, id: &EscalationId) -> Result<EscalationRecord, PortError> {
        let url = self.endpoint(&["v2", "escalations", id.as_str()]);
        let escalation: EscalationDto = self
            .get(url, &[("identifierType", "id".to_string())])
            .await?;
        Ok(escalation.into())
    }
}
