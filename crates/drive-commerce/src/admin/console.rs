use tracing::{info, warn};

use super::AdminResource;
use crate::CommerceError;

/// A delete waiting for the operator's confirmation.
#[derive(Debug)]
#[must_use = "a pending delete does nothing until confirmed"]
pub struct PendingDelete<Id> {
    id: Id,
}

impl<Id> PendingDelete<Id> {
    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn confirm(self) -> ConfirmedDelete<Id> {
        ConfirmedDelete { id: self.id }
    }

    /// Drop the request.
    pub fn cancel(self) {}
}

/// Proof that a delete was confirmed. Only obtainable from
/// [`PendingDelete::confirm`].
#[derive(Debug)]
pub struct ConfirmedDelete<Id> {
    id: Id,
}

impl<Id> ConfirmedDelete<Id> {
    pub fn id(&self) -> &Id {
        &self.id
    }
}

/// Listing plus mutations for one resource.
pub struct AdminConsole<R: AdminResource> {
    resource: R,
    records: Vec<R::Record>,
}

impl<R: AdminResource> AdminConsole<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            records: Vec::new(),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Records from the last fetch.
    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub async fn refresh(&mut self) -> Result<&[R::Record], CommerceError> {
        self.records = self.resource.list().await?;
        Ok(&self.records)
    }

    pub async fn create(&mut self, new: &R::New) -> Result<R::Id, CommerceError> {
        let id = self.resource.create(new).await.inspect_err(|err| {
            warn!(resource = self.resource.name(), error = %err, "create failed");
        })?;
        info!(resource = self.resource.name(), %id, "created");
        self.refresh().await?;
        Ok(id)
    }

    pub async fn update(&mut self, id: &R::Id, changes: &R::Changes) -> Result<(), CommerceError> {
        self.resource.update(id, changes).await.inspect_err(|err| {
            warn!(resource = self.resource.name(), %id, error = %err, "update failed");
        })?;
        info!(resource = self.resource.name(), %id, "updated");
        self.refresh().await?;
        Ok(())
    }

    pub fn request_delete(&self, id: R::Id) -> PendingDelete<R::Id> {
        PendingDelete { id }
    }

    pub async fn delete(&mut self, confirmed: ConfirmedDelete<R::Id>) -> Result<(), CommerceError> {
        let id = confirmed.id;
        self.resource.delete(&id).await.inspect_err(|err| {
            warn!(resource = self.resource.name(), %id, error = %err, "delete failed");
        })?;
        info!(resource = self.resource.name(), %id, "deleted");
        self.refresh().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Notes {
        rows: Mutex<Vec<(u32, String)>>,
        lists: Mutex<u32>,
    }

    #[async_trait]
    impl AdminResource for Notes {
        type Id = u32;
        type Record = (u32, String);
        type New = String;
        type Changes = String;

        fn name(&self) -> &'static str {
            "notes"
        }

        async fn list(&self) -> Result<Vec<(u32, String)>, ApiError> {
            *self.lists.lock().unwrap() += 1;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn create(&self, new: &String) -> Result<u32, ApiError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as u32 + 1;
            rows.push((id, new.clone()));
            Ok(id)
        }

        async fn update(&self, id: &u32, changes: &String) -> Result<(), ApiError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|(row, _)| row == id) {
                Some(row) => {
                    row.1 = changes.clone();
                    Ok(())
                }
                None => Err(ApiError::Graphql(vec!["not found".into()])),
            }
        }

        async fn delete(&self, id: &u32) -> Result<(), ApiError> {
            self.rows.lock().unwrap().retain(|(row, _)| row != id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mutations_refetch_listing() {
        let notes = Arc::new(Notes::default());
        let mut console = AdminConsole::new(notes.clone());

        let id = console.create(&"first".to_string()).await.unwrap();
        assert_eq!(console.records(), &[(1, "first".to_string())]);

        console.update(&id, &"edited".to_string()).await.unwrap();
        assert_eq!(console.records()[0].1, "edited");

        let pending = console.request_delete(id);
        console.delete(pending.confirm()).await.unwrap();
        assert!(console.records().is_empty());
        assert_eq!(*notes.lists.lock().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_failed_mutation_skips_refetch() {
        let notes = Arc::new(Notes::default());
        let mut console = AdminConsole::new(notes.clone());

        let err = console.update(&9, &"x".to_string()).await.unwrap_err();
        assert!(matches!(err, CommerceError::Api(ApiError::Graphql(_))));
        assert_eq!(*notes.lists.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_delete_sends_nothing() {
        let notes = Arc::new(Notes::default());
        let mut console = AdminConsole::new(notes.clone());
        console.create(&"keep".to_string()).await.unwrap();

        console.request_delete(1).cancel();
        assert_eq!(console.refresh().await.unwrap().len(), 1);
    }
}
