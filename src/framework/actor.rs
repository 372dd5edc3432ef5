//! # Generic Store Actor
//!
//! The server half of a store: owns the record map, assigns identifiers and
//! processes [`StoreRequest`] messages sequentially until its channel closes.
//!
//! # Architecture Note
//! Even with many `StoreActor` instances running, each one processes its own
//! messages one at a time. The record map therefore needs no `Mutex` or
//! `RwLock`: exclusive ownership within the task is the synchronization.
//! This is also what makes a menu creation atomic with respect to other
//! creations - the whole save (validation hook plus insert) runs as one
//! message.

use crate::framework::client::StoreClient;
use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns all records of one entity type.
///
/// # Usage Pattern
/// 1. **Create**: `StoreActor::new(buffer)` returns the actor and its client.
/// 2. **Wire**: pass the entity's dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// # Save Semantics
/// A save assigns the next identifier, constructs the record via
/// [`StoreEntity::from_create_params`], runs the [`StoreEntity::on_create`]
/// hook, and only then inserts. A failure at any point leaves the store
/// untouched; the stored record is echoed back to the caller on success.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: HashMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop, processing requests until every client
    /// has been dropped.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every `on_create` hook. This lets
    /// a record validate against other stores that were created *after* this
    /// actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Short type name (e.g. "Menu" instead of "pos_menu::model::menu::Menu")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { params, respond_to } => {
                    debug!(entity_type, ?params, "Save");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut record) => {
                            if let Err(e) = record.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.records.insert(id.clone(), record.clone());
                            info!(entity_type, %id, size = self.records.len(), "Saved");
                            let _ = respond_to.send(Ok(record));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Save rejected");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::FindById { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    let found = record.is_some();
                    debug!(entity_type, %id, found, "FindById");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::FindAll { respond_to } => {
                    let records: Vec<T> = self.records.values().cloned().collect();
                    debug!(entity_type, count = records.len(), "FindAll");
                    let _ = respond_to.send(Ok(records));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct WidgetCreate {
        name: String,
    }

    #[derive(Debug, thiserror::Error)]
    enum WidgetError {
        #[error("widget name must not be empty")]
        EmptyName,
    }

    #[async_trait]
    impl StoreEntity for Widget {
        type Id = u32;
        type Create = WidgetCreate;
        type Context = ();
        type Error = WidgetError;

        fn from_create_params(id: u32, params: WidgetCreate) -> Result<Self, WidgetError> {
            if params.name.is_empty() {
                return Err(WidgetError::EmptyName);
            }
            Ok(Self {
                id,
                name: params.name,
            })
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids_and_echoes_the_record() {
        let (actor, client) = StoreActor::<Widget>::new(10);
        tokio::spawn(actor.run(()));

        let first = client
            .save(WidgetCreate {
                name: "left".into(),
            })
            .await
            .unwrap();
        let second = client
            .save(WidgetCreate {
                name: "right".into(),
            })
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.name, "right");
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_ids() {
        let (actor, client) = StoreActor::<Widget>::new(10);
        tokio::spawn(actor.run(()));

        let saved = client
            .save(WidgetCreate {
                name: "only".into(),
            })
            .await
            .unwrap();

        assert_eq!(client.find_by_id(saved.id).await.unwrap(), Some(saved));
        assert_eq!(client.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejected_save_leaves_the_store_untouched() {
        let (actor, client) = StoreActor::<Widget>::new(10);
        tokio::spawn(actor.run(()));

        let result = client.save(WidgetCreate { name: String::new() }).await;
        assert!(matches!(result, Err(StoreError::EntityError(_))));

        let all = client.find_all().await.unwrap();
        assert!(all.is_empty());
    }
}
