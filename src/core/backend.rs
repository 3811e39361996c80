use crate::core::{ConfigProvider, OutletBackend, OutletRecord, UpsertOutcome};
use reqwest::{Client, StatusCode};
use serde::Serialize;

/// Creation payload for the outlets resource.
#[derive(Debug, Serialize)]
struct OutletPayload<'a> {
    outlet_code: &'a str,
    outlet_code_short: &'a str,
    outlet_name: &'a str,
    address: &'a str,
    is_active: bool,
}

/// Creation payload for the users resource. The backend stores the credential
/// exactly as given.
#[derive(Debug, Serialize)]
struct UserPayload<'a> {
    username: &'a str,
    password_hash: &'a str,
    full_name: &'a str,
    role: &'a str,
    outlet_code: &'a str,
    is_active: bool,
}

/// REST client for the hosted backend. One POST per upsert, no retries; a
/// conflict response means the row is already provisioned.
pub struct RestBackend<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> RestBackend<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    async fn post_resource<T: Serialize>(&self, resource: &str, payload: &T) -> UpsertOutcome {
        let url = format!(
            "{}/rest/v1/{}",
            self.config.base_url().trim_end_matches('/'),
            resource
        );
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("apikey", self.config.api_key())
            .bearer_auth(self.config.bearer_token())
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await;

        match response {
            Ok(response) => {
                tracing::debug!("{} response status: {}", resource, response.status());
                classify_response(response).await
            }
            Err(e) => UpsertOutcome::Failed(format!("Exception: {}", e)),
        }
    }
}

async fn classify_response(response: reqwest::Response) -> UpsertOutcome {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED => UpsertOutcome::Created,
        StatusCode::CONFLICT => UpsertOutcome::AlreadyExists,
        status => {
            let body = response.text().await.unwrap_or_default();
            UpsertOutcome::Failed(format!("Error: {} - {}", status.as_u16(), body))
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> OutletBackend for RestBackend<C> {
    async fn upsert_outlet(&self, record: &OutletRecord) -> UpsertOutcome {
        let payload = OutletPayload {
            outlet_code: &record.store_code,
            outlet_code_short: &record.short_name,
            outlet_name: &record.store_name,
            address: "",
            is_active: true,
        };
        self.post_resource("outlets", &payload).await
    }

    async fn upsert_user(&self, record: &OutletRecord) -> UpsertOutcome {
        let payload = UserPayload {
            username: &record.short_name,
            password_hash: self.config.default_password(),
            full_name: &record.store_name,
            role: "outlet",
            outlet_code: &record.store_code,
            is_active: true,
        };
        self.post_resource("users", &payload).await
    }
}
