use async_trait::async_trait;

use rota_ports::error::PortError;
use rota_ports::outbound::TeamDirectory;
use rota_ports::types::{RoutingRule, TeamRef};

use super::dto::RoutingRuleDto;
use super::OpsGenieClient;

#[async_trait]
impl TeamDirectory for OpsGenieClient {
    async fn list_routing_rules(&self, team: &TeamRef) -> Result<Vec<RoutingRule>, PortError> {
        let (identifier, kind) = match team {
            TeamRef::Id(id) => (id.as_str(), "id"),
            TeamRef::Name(name) => (name.as_str(), "name"),
        };
        let url = self.endpoint(&["v2", "teams", identifier, "routing-rules"]);

        let rules: Vec<RoutingRuleDto> = self
            .get(url, &[("teamIdentifierType", kind.to_string())])
            .await?;

        Ok(rules.into_iter().map(RoutingRule::from).collect())
    }
}
