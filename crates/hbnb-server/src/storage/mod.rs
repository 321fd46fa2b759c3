//! Storage layer
//!
//! Two interchangeable backends behind [`Store`]: a JSON file kept in
//! memory, and a relational database. [`Storage`] picks one at startup.

pub mod db;
pub mod file;
pub mod session;

pub use db::DbStorage;
pub use file::FileStorage;

use crate::settings::{Settings, StorageBackend};
use async_trait::async_trait;
use hbnb_core::{Objects, Record, RecordKind, Result, Store};
use tracing::info;

/// The backend selected by configuration.
pub enum Storage {
    File(FileStorage),
    Db(DbStorage),
}

impl Storage {
    /// Build the configured backend and run its first `reload`.
    pub async fn open(settings: &Settings) -> Result<Self> {
        let storage = match settings.type_storage {
            StorageBackend::File => Storage::File(FileStorage::new(&settings.file_path)),
            StorageBackend::Db => {
                let url = settings.database_url();
                Storage::Db(DbStorage::connect(&url, settings.is_test()).await?)
            }
        };

        storage.reload().await?;
        info!("Storage ready");
        Ok(storage)
    }

    fn inner(&self) -> &dyn Store {
        match self {
            Storage::File(storage) => storage,
            Storage::Db(storage) => storage,
        }
    }
}

#[async_trait]
impl Store for Storage {
    fn kinds(&self) -> &'static [RecordKind] {
        self.inner().kinds()
    }

    async fn all(&self, kind: Option<RecordKind>) -> Result<Objects> {
        self.inner().all(kind).await
    }

    async fn new(&self, record: Option<Record>) -> Result<()> {
        self.inner().new(record).await
    }

    async fn save(&self) -> Result<()> {
        self.inner().save().await
    }

    async fn delete(&self, record: Option<&Record>) -> Result<()> {
        self.inner().delete(record).await
    }

    async fn reload(&self) -> Result<()> {
        self.inner().reload().await
    }

    async fn close(&self) -> Result<()> {
        self.inner().close().await
    }
}
