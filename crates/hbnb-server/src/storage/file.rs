//! JSON file storage
//!
//! Keeps every record in memory, keyed by storage key, and persists the
//! whole map as one JSON object on `save`.

use async_trait::async_trait;
use hbnb_core::{password, Objects, Record, RecordKind, Result, Store, StorageError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

pub struct FileStorage {
    path: PathBuf,
    objects: RwLock<Objects>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            objects: RwLock::new(Objects::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and replace the in-memory map.
    ///
    /// Unlike [`Store::reload`], failures are returned: a missing file is an
    /// `Io` error with kind `NotFound`, bad content is `Malformed`. On any
    /// error the map is left as it was.
    pub async fn load(&self) -> Result<()> {
        let content = tokio::fs::read_to_string(&self.path).await?;

        let entries: BTreeMap<String, Record> =
            serde_json::from_str(&content).map_err(|e| StorageError::Malformed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        // Keys are rebuilt from the records so a hand-edited key cannot
        // disagree with the record it points at.
        let objects: Objects = entries
            .into_values()
            .map(|record| (record.key(), record))
            .collect();

        debug!(
            "Loaded {} records from {}",
            objects.len(),
            self.path.display()
        );
        *self.objects.write().await = objects;
        Ok(())
    }
}

#[async_trait]
impl Store for FileStorage {
    fn kinds(&self) -> &'static [RecordKind] {
        &RecordKind::ALL
    }

    async fn all(&self, kind: Option<RecordKind>) -> Result<Objects> {
        let objects = self.objects.read().await;
        Ok(match kind {
            None => objects.clone(),
            Some(kind) => objects
                .iter()
                .filter(|(_, record)| record.kind() == kind)
                .map(|(key, record)| (key.clone(), record.clone()))
                .collect(),
        })
    }

    async fn new(&self, record: Option<Record>) -> Result<()> {
        let Some(mut record) = record else {
            return Ok(());
        };

        password::prepare(&mut record)?;
        self.objects.write().await.insert(record.key(), record);
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        let json = {
            let objects = self.objects.read().await;
            serde_json::to_string(&*objects)?
        };

        tokio::fs::write(&self.path, json).await?;
        debug!("Saved storage file {}", self.path.display());
        Ok(())
    }

    async fn delete(&self, record: Option<&Record>) -> Result<()> {
        if let Some(record) = record {
            self.objects.write().await.remove(&record.key());
        }
        Ok(())
    }

    /// Missing, unreadable or malformed files leave the map untouched and
    /// are not reported to the caller.
    async fn reload(&self) -> Result<()> {
        match self.load().await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                debug!("No storage file at {}, starting empty", self.path.display());
            }
            Err(e) => {
                warn!("Ignoring unusable storage file: {}", e);
            }
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.reload().await
    }
}
