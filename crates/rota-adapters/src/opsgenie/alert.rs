use async_trait::async_trait;

use rota_ports::error::PortError;
use rota_ports::outbound::AlertSource;
use rota_ports::types::{AlertQuery, AlertRecord};

use super::dto::AlertDto;
use super::OpsGenieClient;

#[async_trait]
impl AlertSource for OpsGenieClient {
    async fn list_alerts(&self, query: &AlertQuery) -> Result<Vec<AlertRecord>, PortError> {
        let url = self.endpoint(&["v2", "alerts"]);
        let params = [
            ("query", query.query.clone()),
            ("sort", "createdAt".to_string()),
            ("order", "desc".to_string()),
            ("limit", query.limit.to_string()),
        ];

        let alerts: Vec<AlertDto> = self.get(url, &params).await?;
        Ok(alerts.into_iter().map(AlertRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opsgenie::test_support::client;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn open_alerts_for_team() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/alerts"))
            .and(query_param("query", r#"status:open AND responders: "sre""#))
            .and(query_param("sort", "createdAt"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {
                        "id": "a-1",
                        "tinyId": "42",
                        "message": "CPU saturation on db-01",
                        "status": "open",
                        "acknowledged": true,
                        "owner": "alice@example.com",
                        "priority": "P1",
                        "createdAt": "2025-01-15T09:58:12.331Z"
                    },
                    {
                        "id": "a-2",
                        "message": "Certificate expires in 7 days",
                        "status": "open",
                        "acknowledged": false,
                        "owner": "",
                        "priority": "P4",
                        "createdAt": "2025-01-15T08:00:00Z"
                    }
                ],
                "took": 0.05
            })))
            .expect(1)
            .mount(&server)
            .await;

        let alerts = client(&server.uri())
            .list_alerts(&AlertQuery::open_for_team("sre", 20))
            .await
            .unwrap();

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].id.as_str(), "a-1");
        assert_eq!(alerts[0].priority, "P1");
        assert!(alerts[0].acknowledged);
        assert_eq!(alerts[0].owner, "alice@example.com");
        assert_eq!(alerts[1].message, "Certificate expires in 7 days");
        assert!(!alerts[1].acknowledged);
    }
}
