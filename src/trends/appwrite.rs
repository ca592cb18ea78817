//! Appwrite REST backend.
//!
//! Talks to `/databases/{db}/collections/{collection}/documents` directly
//! with reqwest. Queries use the JSON query syntax passed as repeated
//! `queries[]` parameters.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;

use crate::config::{SecureString, TrendsConfig};
use crate::trends::backend::{DocumentBackend, StoreError};
use crate::trends::record::{NewTrendRecord, TrendRecord};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";
const COUNT_ATTRIBUTE: &str = "count";

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

pub struct AppwriteBackend {
    client: Client,
    endpoint: String,
    project_id: Option<String>,
    database_id: Option<String>,
    collection_id: Option<String>,
    api_key: Option<SecureString>,
}

impl AppwriteBackend {
    pub fn new(config: &TrendsConfig) -> Result<Self, StoreError> {
        let client = Client::builder().build().map_err(StoreError::Client)?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            collection_id: config.collection_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn documents_url(&self) -> Result<String, StoreError> {
        let database = self
            .database_id
            .as_deref()
            .ok_or(StoreError::NotConfigured {
                field: "database_id",
            })?;
        let collection = self
            .collection_id
            .as_deref()
            .ok_or(StoreError::NotConfigured {
                field: "collection_id",
            })?;
        Ok(format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, database, collection
        ))
    }

    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, StoreError> {
        let project = self
            .project_id
            .as_deref()
            .ok_or(StoreError::NotConfigured {
                field: "project_id",
            })?;
        let builder = builder.header(PROJECT_HEADER, project);
        Ok(match &self.api_key {
            Some(key) => builder.header(KEY_HEADER, key.expose()),
            None => builder,
        })
    }

    async fn list(&self, queries: Vec<serde_json::Value>) -> Result<Vec<TrendRecord>, StoreError> {
        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|q| ("queries[]", q.to_string()))
            .collect();
        let request = self.authorize(self.client.get(self.documents_url()?).query(&params))?;
        let list: DocumentList = decode(request.send().await?).await?;
        Ok(list.documents)
    }
}

/// Maps non-2xx responses to `StoreError::Status`, then decodes the body.
async fn decode<T>(response: Response) -> Result<T, StoreError>
where
    T: for<'de> Deserialize<'de>,
{
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or_default();
        return Err(StoreError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(serde_json::from_slice(&body)?)
}

fn equal_query(attribute: &str, value: &str) -> serde_json::Value {
    json!({ "method": "equal", "attribute": attribute, "values": [value] })
}

fn order_desc_query(attribute: &str) -> serde_json::Value {
    json!({ "method": "orderDesc", "attribute": attribute })
}

fn limit_query(limit: usize) -> serde_json::Value {
    json!({ "method": "limit", "values": [limit] })
}

#[async_trait]
impl DocumentBackend for AppwriteBackend {
    fn name(&self) -> &'static str {
        "appwrite"
    }

    async fn find_by_term(&self, term: &str) -> Result<Option<TrendRecord>, StoreError> {
        let documents = self
            .list(vec![equal_query("searchTerm", term), limit_query(1)])
            .await?;
        Ok(documents.into_iter().next())
    }

    async fn list_top(&self, limit: usize) -> Result<Vec<TrendRecord>, StoreError> {
        self.list(vec![limit_query(limit), order_desc_query(COUNT_ATTRIBUTE)])
            .await
    }

    async fn create(&self, record: NewTrendRecord) -> Result<TrendRecord, StoreError> {
        let body = json!({
            "documentId": uuid::Uuid::new_v4().simple().to_string(),
            "data": record,
        });
        let request = self.authorize(self.client.post(self.documents_url()?).json(&body))?;
        decode(request.send().await?).await
    }

    async fn increment(&self, id: &str, by: u64) -> Result<TrendRecord, StoreError> {
        let url = format!(
            "{}/{}/{}/increment",
            self.documents_url()?,
            id,
            COUNT_ATTRIBUTE
        );
        let request = self.authorize(self.client.patch(url).json(&json!({ "value": by })))?;
        decode(request.send().await?).await
    }
}
