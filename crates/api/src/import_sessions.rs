//! In-memory registry of open bulk import sessions.
//!
//! Parsed records and row errors live only here, never in the database,
//! until the operator confirms the import. Each session sits behind its own
//! mutex so that a slow submission for one shelter does not hold up others.

use std::collections::HashMap;
use std::sync::Arc;

use labka_core::error::CoreError;
use labka_core::importer::{submit_batch, ImportFlow, PetStore};
use labka_core::types::Timestamp;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Shared handle to one session's flow.
pub type SessionHandle = Arc<Mutex<ImportFlow>>;

/// A running batch submission, resolving to the number of stored pets.
pub type SubmissionHandle = JoinHandle<Result<usize, CoreError>>;

/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
#[derive(Default)]
pub struct ImportSessionStore {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl ImportSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flow and return its new session id.
    pub async fn insert(&self, flow: ImportFlow) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(flow)));
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Remove a session, returning its handle if it existed.
    pub async fn remove(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.write().await.remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop sessions untouched since `cutoff`, whatever their step.
    ///
    /// Sessions whose lock is currently held are kept. A submission task
    /// still running for a dropped session settles its own copy of the
    /// flow. Returns how many sessions were removed.
    pub async fn purge_idle(&self, cutoff: Timestamp) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(flow) => flow.updated_at() >= cutoff,
            Err(_) => true,
        });
        before - sessions.len()
    }

    /// Move a session to `uploading` and store its batch on a detached task.
    ///
    /// The task owns the session handle and always settles the flow:
    /// closed and removed from the registry on success, back in `preview`
    /// with the banner on failure. Dropping the returned handle (a timed
    /// out request, a client that went away) does not stop the task.
    ///
    /// Fails with [`CoreError::Conflict`] when the session is not in
    /// `preview` or has nothing to store.
    pub async fn start_submission<S>(
        self: &Arc<Self>,
        session_id: Uuid,
        handle: SessionHandle,
        store: S,
    ) -> Result<SubmissionHandle, CoreError>
    where
        S: PetStore + 'static,
    {
        let (shelter_id, default_location, records) = {
            let mut flow = handle.lock().await;
            let records = flow.begin_upload()?;
            (flow.shelter_id(), flow.default_location().to_string(), records)
        };

        let sessions = Arc::clone(self);
        Ok(tokio::spawn(async move {
            let outcome = submit_batch(&store, shelter_id, records, &default_location).await;

            let mut flow = handle.lock().await;
            match &outcome {
                Ok(created) => {
                    flow.complete_upload(*created);
                    drop(flow);
                    sessions.remove(session_id).await;
                }
                Err(e) => flow.fail_upload(e.to_string()),
            }
            outcome
        }))
    }
}
