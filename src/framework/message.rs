//! Request messages exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot channel an actor answers a request on.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// The uniform operation set every resource actor understands: CRUD, a
/// filtered `Find`, and an escape hatch (`Action`) for domain operations the
/// CRUD model cannot express.
///
/// All payload types come from the entity's associated types, so a request
/// for one resource type cannot be addressed to another actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Returns every stored entity matching the filter, in arbitrary store
    /// order. Callers are responsible for sorting.
    Find {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
