use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::{application::LookupController, domain::ports::geolocation::GeolocationClient};

/// Request header carrying the caller's lookup session id.
pub const SESSION_HEADER: &str = "x-lookup-session";

pub struct AppState<C: GeolocationClient> {
    pub sessions: Arc<SessionStore<C>>,
}

impl<C: GeolocationClient> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
        }
    }
}

/// One [`LookupController`] per caller, all sharing a single geolocation client.
pub struct SessionStore<C: GeolocationClient> {
    client: Arc<C>,
    controllers: RwLock<HashMap<String, Arc<LookupController<C>>>>,
}

impl<C: GeolocationClient> SessionStore<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            controllers: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the controller for `id`, creating it on first use. Without an
    /// id a fresh session is opened under a new random id.
    pub async fn get_or_create(&self, id: Option<&str>) -> (String, Arc<LookupController<C>>) {
        let id = match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => uuid::Uuid::new_v4().to_string(),
        };

        if let Some(controller) = self.controllers.read().await.get(&id) {
            return (id, controller.clone());
        }

        let mut controllers = self.controllers.write().await;
        let controller = controllers
            .entry(id.clone())
            .or_insert_with(|| {
                tracing::debug!(session = %id, "opening lookup session");
                Arc::new(LookupController::with_client(self.client.clone()))
            })
            .clone();
        (id, controller)
    }

    pub async fn len(&self) -> usize {
        self.controllers.read().await.len()
    }
}
