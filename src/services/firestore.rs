use crate::models::{BreedInfo, Dog};
use crate::services::breed_store::{BreedStore, DogStore, StoreError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{Map, Number, Value};
use std::time::Duration;

/// Largest page the Firestore list endpoint will return
const MAX_PAGE_SIZE: usize = 300;

/// Collection IDs in Firestore
#[derive(Debug, Clone)]
pub struct FirestoreCollections {
    pub breeds: String,
    pub dogs: String,
}

/// Firestore REST client
///
/// Handles all reads from the marketplace's document database:
/// - Fetching breed records by canonical breed key
/// - Fetching a single dog listing
/// - Listing dog listings as a candidate pool
pub struct FirestoreClient {
    base_url: String,
    project_id: String,
    database_id: String,
    api_key: Option<String>,
    client: Client,
    collections: FirestoreCollections,
}

impl FirestoreClient {
    /// Create a new Firestore client
    pub fn new(
        base_url: String,
        project_id: String,
        database_id: String,
        api_key: Option<String>,
        collections: FirestoreCollections,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            project_id,
            database_id,
            api_key,
            client,
            collections,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.database_id,
            collection
        )
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }

    /// Fetch one document as plain JSON, `None` on 404
    async fn get_document(&self, collection: &str, document_id: &str) -> Result<Option<Value>, StoreError> {
        let url = format!(
            "{}/{}",
            self.collection_url(collection),
            urlencoding::encode(document_id)
        );

        tracing::debug!("Fetching document: {}", url);

        let response = self.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch {}/{}: {} - {}", collection, document_id, status, body);
            return Err(StoreError::ApiError(format!(
                "Failed to fetch document: {}",
                status
            )));
        }

        let json: Value = response.json().await?;
        Ok(Some(decode_document(&json)))
    }

    /// Fetch a breed record by canonical breed key
    pub async fn get_breed(&self, breed_key: &str) -> Result<Option<BreedInfo>, StoreError> {
        let Some(data) = self.get_document(&self.collections.breeds, breed_key).await? else {
            return Ok(None);
        };

        serde_json::from_value(data)
            .map(Some)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse breed {}: {}", breed_key, e)))
    }

    /// Fetch a single dog listing
    pub async fn get_dog(&self, dog_id: &str) -> Result<Option<Dog>, StoreError> {
        let Some(data) = self.get_document(&self.collections.dogs, dog_id).await? else {
            return Ok(None);
        };

        serde_json::from_value(data)
            .map(Some)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse dog {}: {}", dog_id, e)))
    }

    /// List up to `limit` dog listings, following page tokens
    ///
    /// Documents that do not decode as a dog are skipped.
    pub async fn list_dogs(&self, limit: usize) -> Result<Vec<Dog>, StoreError> {
        let url = self.collection_url(&self.collections.dogs);
        let mut dogs = Vec::new();
        let mut page_token: Option<String> = None;

        while dogs.len() < limit {
            let page_size = (limit - dogs.len()).min(MAX_PAGE_SIZE).to_string();
            let mut request = self.get(&url).query(&[("pageSize", page_size.as_str())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await?;

            if !response.status().is_success() {
                return Err(StoreError::ApiError(format!(
                    "Failed to list dogs: {}",
                    response.status()
                )));
            }

            let json: Value = response.json().await?;

            // An empty collection comes back as `{}`
            let documents = match json.get("documents") {
                Some(Value::Array(documents)) => documents.as_slice(),
                Some(_) => {
                    return Err(StoreError::InvalidResponse("documents is not an array".into()));
                }
                None => &[],
            };

            let before = dogs.len();
            dogs.extend(documents.iter().filter_map(|doc| {
                match serde_json::from_value::<Dog>(decode_document(doc)) {
                    Ok(dog) => Some(dog),
                    Err(e) => {
                        tracing::warn!("Skipping undecodable dog document: {}", e);
                        None
                    }
                }
            }));

            tracing::debug!("Listed {} dogs (page of {})", dogs.len() - before, documents.len());

            page_token = json
                .get("nextPageToken")
                .and_then(|t| t.as_str())
                .map(str::to_string);

            if page_token.is_none() || documents.is_empty() {
                break;
            }
        }

        dogs.truncate(limit);
        Ok(dogs)
    }
}

#[async_trait]
impl BreedStore for FirestoreClient {
    async fn lookup(&self, breed_key: &str) -> Result<Option<BreedInfo>, StoreError> {
        self.get_breed(breed_key).await
    }
}

#[async_trait]
impl DogStore for FirestoreClient {
    async fn get_dog(&self, dog_id: &str) -> Result<Option<Dog>, StoreError> {
        FirestoreClient::get_dog(self, dog_id).await
    }

    async fn list_dogs(&self, limit: usize) -> Result<Vec<Dog>, StoreError> {
        FirestoreClient::list_dogs(self, limit).await
    }
}

/// Flatten a Firestore document into plain JSON
///
/// The last segment of the document name fills `id` when the document has
/// no `id` field of its own.
pub fn decode_document(document: &Value) -> Value {
    let mut data = match document.get("fields") {
        Some(Value::Object(fields)) => decode_fields(fields),
        _ => Map::new(),
    };

    let has_id = matches!(data.get("id"), Some(Value::String(id)) if !id.is_empty());
    if !has_id {
        if let Some(id) = document
            .get("name")
            .and_then(|n| n.as_str())
            .and_then(|n| n.rsplit('/').next())
        {
            data.insert("id".to_string(), Value::String(id.to_string()));
        }
    }

    Value::Object(data)
}

fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), decode_value(value)))
        .collect()
}

/// Convert one Firestore typed value (`{"stringValue": "..."}` etc.) to JSON
pub fn decode_value(value: &Value) -> Value {
    let Some(typed) = value.as_object() else {
        return Value::Null;
    };

    if let Some(v) = typed.get("stringValue") {
        return v.clone();
    }
    if let Some(v) = typed.get("integerValue") {
        // int64 values are sent as strings
        return match v {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .unwrap_or(Value::Null),
            other => other.clone(),
        };
    }
    if let Some(v) = typed.get("doubleValue") {
        return match v {
            Value::Number(_) => v.clone(),
            // NaN and Infinity arrive as strings and have no JSON form
            Value::String(s) => s
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            _ => Value::Null,
        };
    }
    if let Some(v) = typed.get("booleanValue") {
        return v.clone();
    }
    if let Some(v) = typed.get("timestampValue") {
        return v.clone();
    }
    if let Some(v) = typed.get("referenceValue") {
        return v.clone();
    }
    if let Some(v) = typed.get("arrayValue") {
        let values = v
            .get("values")
            .and_then(|vals| vals.as_array())
            .map(|vals| vals.iter().map(decode_value).collect())
            .unwrap_or_default();
        return Value::Array(values);
    }
    if let Some(v) = typed.get("mapValue") {
        let fields = match v.get("fields") {
            Some(Value::Object(fields)) => decode_fields(fields),
            _ => Map::new(),
        };
        return Value::Object(fields);
    }
    if let Some(v) = typed.get("geoPointValue") {
        return v.clone();
    }

    Value::Null
}
