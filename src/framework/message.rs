//! # Store Messages
//!
//! The message types exchanged between a [`StoreClient`](crate::framework::StoreClient)
//! and its [`StoreActor`](crate::framework::StoreActor).

use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a store actor.
///
/// The variants are exactly the capability set the menu subsystem expects
/// from a store: `save` (identifier assignment + insert), `findById`
/// (optional lookup) and `findAll` (full snapshot). There is deliberately no
/// update or delete: nothing in this subsystem mutates a record after
/// creation.
///
/// The enum is generic over `T: StoreEntity` and uses the trait's associated
/// types, so a payload for one entity type can never reach another entity's
/// store.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Save {
        params: T::Create,
        respond_to: Response<T>,
    },
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindAll { respond_to: Response<Vec<T>> },
}
