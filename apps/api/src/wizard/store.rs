//! In-memory wizard session store.
//!
//! Sessions are explicit, id-addressed objects rather than an ambient
//! process-wide "current draft". All wizard mutations are synchronous
//! reactions to single requests, so a plain RwLock-guarded map is enough;
//! each session owns its draft and no two requests mutate one concurrently
//! without serializing through the write lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::wizard::WizardSession;

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, WizardSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: WizardSession) {
        self.inner.write().await.insert(session.id, session);
    }

    /// Returns a snapshot of the session.
    pub async fn get(&self, id: Uuid) -> Result<WizardSession, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("wizard session {id} not found")))
    }

    /// Runs a mutation against the session under the write lock.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut WizardSession) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("wizard session {id} not found")))?;
        f(session)
    }
}
