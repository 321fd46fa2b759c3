//! Storage trait shared by the file and database backends

use crate::Result;
use async_trait::async_trait;
use hbnb_types::{Record, RecordKind};
use std::collections::BTreeMap;

/// Records keyed by storage key (`<ClassName>.<id>`).
pub type Objects = BTreeMap<String, Record>;

/// Uniform CRUD contract over a persistence medium.
///
/// `new` and `delete` only stage changes; they become durable on the next
/// `save`. A unit of work (typically one request) is bracketed by
/// `reload` and `close`. Every read returns owned snapshots, so callers
/// that mutate a record must hand it back through `new` and `save`.
#[async_trait]
pub trait Store: Send + Sync {
    /// Kinds this backend can hold.
    fn kinds(&self) -> &'static [RecordKind];

    /// All records, or only those of `kind`.
    async fn all(&self, kind: Option<RecordKind>) -> Result<Objects>;

    /// Stage a record for insertion or overwrite. `None` is a no-op.
    async fn new(&self, record: Option<Record>) -> Result<()>;

    /// Make every staged change durable.
    async fn save(&self) -> Result<()>;

    /// Stage removal of a record. `None` is a no-op.
    async fn delete(&self, record: Option<&Record>) -> Result<()>;

    /// Bring the store in sync with its medium and start a unit of work.
    async fn reload(&self) -> Result<()>;

    /// End the current unit of work.
    async fn close(&self) -> Result<()>;

    async fn get(&self, kind: RecordKind, id: &str) -> Result<Option<Record>> {
        if !self.kinds().contains(&kind) {
            return Ok(None);
        }

        let objects = self.all(Some(kind)).await?;
        Ok(objects.into_values().find(|record| record.id() == id))
    }

    /// Number of records of `kind`, or across every kind in [`Store::kinds`].
    async fn count(&self, kind: Option<RecordKind>) -> Result<usize> {
        match kind {
            Some(kind) => Ok(self.all(Some(kind)).await?.len()),
            None => {
                let mut total = 0;
                for kind in self.kinds() {
                    total += self.all(Some(*kind)).await?.len();
                }
                Ok(total)
            }
        }
    }

    /// [`Store::all`] filtered by class name. Unknown names match nothing.
    async fn all_named(&self, name: &str) -> Result<Objects> {
        match name.parse::<RecordKind>() {
            Ok(kind) => self.all(Some(kind)).await,
            Err(_) => Ok(Objects::new()),
        }
    }

    async fn get_named(&self, name: &str, id: &str) -> Result<Option<Record>> {
        match name.parse::<RecordKind>() {
            Ok(kind) => self.get(kind, id).await,
            Err(_) => Ok(None),
        }
    }

    async fn count_named(&self, name: &str) -> Result<usize> {
        match name.parse::<RecordKind>() {
            Ok(kind) => self.count(Some(kind)).await,
            Err(_) => Ok(0),
        }
    }
}
