use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::modules::content::domain::{ContentRecord, ContentSource};
use crate::shared::errors::AppResult;

/// Where the JSON payload lives
#[derive(Debug, Clone)]
enum JsonPayload {
    Inline(String),
    File(PathBuf),
}

/// Content source decoding a JSON array of records
///
/// The payload is decoded on every listing, so a file source picks up
/// changes written between calls.
#[derive(Debug, Clone)]
pub struct JsonContentSource {
    payload: JsonPayload,
}

impl JsonContentSource {
    /// Source backed by an in-memory JSON document
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            payload: JsonPayload::Inline(json.into()),
        }
    }

    /// Source backed by a JSON file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            payload: JsonPayload::File(path.as_ref().to_path_buf()),
        }
    }

    /// Decode a JSON array of content records
    pub fn decode(json: &str) -> AppResult<Vec<ContentRecord>> {
        let records: Vec<ContentRecord> = serde_json::from_str(json)?;
        Ok(records)
    }
}

#[async_trait]
impl ContentSource for JsonContentSource {
    async fn list_content(&self) -> AppResult<Vec<ContentRecord>> {
        match &self.payload {
            JsonPayload::Inline(json) => Self::decode(json),
            JsonPayload::File(path) => {
                debug!("Reading content records from {}", path.display());
                let json = tokio::fs::read_to_string(path).await?;
                let records = Self::decode(&json)?;
                info!("Decoded {} records from {}", records.len(), path.display());
                Ok(records)
            }
        }
    }

    fn name(&self) -> &str {
        match self.payload {
            JsonPayload::Inline(_) => "json-inline",
            JsonPayload::File(_) => "json-file",
        }
    }
}
