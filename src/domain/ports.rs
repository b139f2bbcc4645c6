use crate::domain::model::{NewRecord, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Records fetched when the caller does not ask for a specific page size.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

pub trait ConfigProvider: Send + Sync {
    fn access_token(&self) -> &str;
    fn object_type(&self) -> &str;
}

/// The remote store of records. Each call is a single request/response
/// exchange; nothing is retried or cached.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// First page only, in the order the store returns it.
    async fn list_records(&self, limit: u32) -> Result<Vec<Record>>;

    async fn create_record(&self, input: &NewRecord) -> Result<Record>;
}
