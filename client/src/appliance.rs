use std::sync::LazyLock;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use types::attendance::AttendanceRecord;
use types::roster::User;
use types::settings::Settings;
use types::{err, Result};

use crate::config::CONFIG;

pub static APPLIANCE: LazyLock<ApplianceClient> =
    LazyLock::new(|| ApplianceClient::new(CONFIG.device_url.clone()));

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
    async fn try_ack(self) -> Result<()>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self
            .send()
            .await
            .map_err(|e| err!("request to appliance failed: {e}"))?
            .error_for_status()
            .map_err(|e| err!("appliance rejected request: {e}"))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| err!("failed to read appliance response: {e}"))?;

        match serde_json::from_slice(&body) {
            Ok(r) => Ok(r),
            Err(error) => {
                let body = String::from_utf8_lossy(&body);
                tracing::debug!(?error, ?body, "failed to parse appliance response");
                Err(err!("unexpected appliance response: {error}"))
            }
        }
    }

    /// Any 2xx is success; the ack body is ignored.
    async fn try_ack(self) -> Result<()> {
        self.send()
            .await
            .map_err(|e| err!("request to appliance failed: {e}"))?
            .error_for_status()
            .map_err(|e| err!("appliance rejected request: {e}"))?;
        Ok(())
    }
}

/// HTTP client for the attendance appliance's REST surface.
///
/// The appliance is the system of record; nothing here is cached or
/// retried, and there is no authentication on the device API.
#[derive(Clone)]
pub struct ApplianceClient {
    client: Client,
    base_url: Url,
}

impl ApplianceClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| err!("invalid appliance path {path:?}: {e}"))?;

        Ok(self.client.request(method, url))
    }

    fn get(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::GET, path.as_ref())
    }

    fn post(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::POST, path.as_ref())
    }

    fn delete(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::DELETE, path.as_ref())
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get("/api/users")?.try_send().await
    }

    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        self.get("/api/attendance")?.try_send().await
    }

    pub async fn register_user(&self, id: &str, name: &str) -> Result<()> {
        self.post("/api/users")?
            .json(&json!({ "id": id, "name": name }))
            .try_ack()
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.delete(format!("/api/users/{id}"))?.try_ack().await
    }

    pub async fn reset_user_absences(&self, id: &str) -> Result<()> {
        self.post(format!("/api/users/{id}/reset"))?.try_ack().await
    }

    pub async fn capture_face(&self, user_id: &str) -> Result<()> {
        self.post("/api/capture-face")?
            .json(&json!({ "userId": user_id }))
            .try_ack()
            .await
    }

    pub async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.post("/api/settings")?.json(settings).try_ack().await
    }

    pub async fn reset_system(&self) -> Result<()> {
        self.post("/api/reset")?.try_ack().await
    }
}
