use crate::domain::model::{OutletRecord, UpsertOutcome};
use async_trait::async_trait;

/// Connection and credential parameters for the backend, injected into the
/// HTTP client instead of living as literals next to it.
pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn bearer_token(&self) -> &str;
    fn default_password(&self) -> &str;
}

/// The two idempotent creation calls the importer drives per record.
/// Implementations classify every response or transport error into an
/// [`UpsertOutcome`] at the call site; nothing is raised past this seam.
#[async_trait]
pub trait OutletBackend: Send + Sync {
    async fn upsert_outlet(&self, record: &OutletRecord) -> UpsertOutcome;
    async fn upsert_user(&self, record: &OutletRecord) -> UpsertOutcome;
}
