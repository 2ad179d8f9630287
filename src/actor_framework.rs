use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks, actions, and queries)
// =============================================================================

/// Trait that any domain entity must implement to be managed by a
/// [`ResourceActor`].
///
/// Each entity brings its own typed error so failures cross the channel as
/// real domain errors rather than strings.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    // --- Typed listing filters ---
    type Query: Send + Sync + Debug;

    type Error: std::error::Error + Clone + Send + Sync + 'static;

    /// Get the ID of the entity.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the ID and creation parameters.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Apply a partial update.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    /// Handle a custom domain-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;

    /// Whether this entity satisfies a listing filter.
    fn matches(&self, query: &Self::Query) -> bool;

    /// The domain error for a missing id.
    fn not_found(id: &Self::Id) -> Self::Error;

    /// The domain error when the actor's channel is gone.
    fn channel_closed() -> Self::Error;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<R, E> = oneshot::Sender<Result<R, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    /// Lists entities in insertion order; `None` lists everything.
    List {
        query: Option<T::Query>,
        respond_to: Response<Vec<T>, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one entity collection and serializes every mutation through its
/// mailbox, which is the single-writer-per-record discipline: nobody else
/// ever holds a live reference into the store.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// Ids in the order they entered the store. `List` walks this so seed
    /// data comes back in its original order.
    insertion: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::with_seed(buffer_size, next_id_fn, Vec::new())
    }

    /// Starts from a pre-populated collection. The seed rows keep their own
    /// ids and their given order; `next_id_fn` only serves later creates.
    pub fn with_seed(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
        seed: Vec<T>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let mut store = HashMap::with_capacity(seed.len());
        let mut insertion = Vec::with_capacity(seed.len());
        for item in seed {
            insertion.push(item.id().clone());
            store.insert(item.id().clone(), item);
        }
        let actor = Self {
            receiver,
            store,
            insertion,
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let id = (self.next_id_fn)();
                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.insertion.push(id.clone());
                            self.store.insert(id.clone(), item);
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(patch) {
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        let _ = respond_to.send(Err(T::not_found(&id)));
                    }
                }
                ResourceRequest::List { query, respond_to } => {
                    let items = self
                        .insertion
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .filter(|item| query.as_ref().map_or(true, |q| item.matches(q)))
                        .cloned()
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item.handle_action(action);
                        let _ = respond_to.send(result);
                    } else {
                        let _ = respond_to.send(Err(T::not_found(&id)));
                    }
                }
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| T::channel_closed())?;
        response.await.map_err(|_| T::channel_closed())?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| T::channel_closed())?;
        response.await.map_err(|_| T::channel_closed())?
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, patch, respond_to })
            .await
            .map_err(|_| T::channel_closed())?;
        response.await.map_err(|_| T::channel_closed())?
    }

    pub async fn list(&self, query: Option<T::Query>) -> Result<Vec<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { query, respond_to })
            .await
            .map_err(|_| T::channel_closed())?;
        response.await.map_err(|_| T::channel_closed())?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { id, action, respond_to })
            .await
            .map_err(|_| T::channel_closed())?;
        response.await.map_err(|_| T::channel_closed())?
    }
}

// =============================================================================
// 5. FRAMEWORK TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Vendor, VendorPatch};
    use crate::error::VendorError;
    use crate::vendor_actor::VendorQuery;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn stall(id: &str, name: &str, open: bool) -> Vendor {
        Vendor::new(id, name, "Test", 4.0, open, "")
    }

    #[tokio::test]
    async fn seeded_list_preserves_seed_order() {
        let seed = vec![
            stall("v1", "First", true),
            stall("v2", "Second", false),
            stall("v3", "Third", true),
        ];
        let (actor, client) = ResourceActor::with_seed(10, || "v_next".to_string(), seed);
        tokio::spawn(actor.run());

        let all = client.list(None).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2", "v3"]);

        let open = client.list(Some(VendorQuery::Open)).await.unwrap();
        let ids: Vec<&str> = open.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v3"]);
    }

    #[tokio::test]
    async fn created_rows_append_after_the_seed() {
        let counter = Arc::new(AtomicU64::new(2));
        let next_id = move || format!("v{}", counter.fetch_add(1, Ordering::SeqCst));

        let seed = vec![stall("v1", "First", true)];
        let (actor, client) = ResourceActor::with_seed(10, next_id, seed);
        tokio::spawn(actor.run());

        let id = client
            .create(crate::domain::VendorCreate {
                name: "Second".into(),
                cuisine: "Test".into(),
                rating: 3.5,
                is_open: true,
                image_url: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(id, "v2");

        let all = client.list(None).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2"]);
    }

    #[tokio::test]
    async fn update_on_missing_id_is_the_entity_not_found_error() {
        let (actor, client) = ResourceActor::<Vendor>::new(10, || "v1".to_string());
        tokio::spawn(actor.run());

        let err = client
            .update("ghost".to_string(), VendorPatch { is_open: Some(true) })
            .await
            .unwrap_err();
        assert_eq!(err, VendorError::NotFound("ghost".into()));
    }
}
