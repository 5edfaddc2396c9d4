use async_trait::async_trait;

use rota_core::ids::UserId;
use rota_ports::error::PortError;
use rota_ports::outbound::UserDirectory;
use rota_ports::types::UserProfile;

use super::dto::UserDto;
use super::OpsGenieClient;

#[async_trait]
impl UserDirectory for OpsGenieClient {
    async fn get_user(&self, id: &UserId) -> Result<UserProfile, PortError> {
        let url = self.endpoint(&["v2", "users", id.as_str()]);
        let user: UserDto = self.get(url, &[("expand", "details".to_string())]).await?;
        Ok(user.into())
    }
}
