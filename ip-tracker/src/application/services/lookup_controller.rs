use std::sync::Arc;

use ipapi_rs::GeoResult;
use tokio::sync::RwLock;

use crate::domain::{
    address, errors::LookupError, ports::geolocation::GeolocationClient, state::LookupState,
};

#[derive(Debug, Default)]
struct Session {
    generation: u64,
    address: Option<String>,
    state: LookupState,
}

/// Drives one lookup interaction: validates input, calls the geolocation
/// client and owns the resulting [`LookupState`].
///
/// Every `submit` and `clear` bumps a generation counter. A client result is
/// only applied if no newer action happened while it was in flight, so the
/// last initiated call always wins.
pub struct LookupController<C: GeolocationClient> {
    client: Arc<C>,
    session: RwLock<Session>,
}

impl<C: GeolocationClient> LookupController<C> {
    pub fn new(client: C) -> Self {
        Self::with_client(Arc::new(client))
    }

    /// Builds a controller over a client shared with other controllers.
    pub fn with_client(client: Arc<C>) -> Self {
        Self {
            client,
            session: RwLock::new(Session::default()),
        }
    }

    pub async fn state(&self) -> LookupState {
        self.session.read().await.state.clone()
    }

    /// Last address that passed validation, if any.
    pub async fn address(&self) -> Option<String> {
        self.session.read().await.address.clone()
    }

    pub async fn snapshot(&self) -> (Option<String>, LookupState) {
        let session = self.session.read().await;
        (session.address.clone(), session.state.clone())
    }

    pub async fn submit(&self, raw_input: &str) -> Result<GeoResult, LookupError> {
        let address = raw_input.trim();

        let generation = {
            let mut session = self.session.write().await;
            session.generation += 1;

            if let Err(err) = check_input(address) {
                tracing::debug!(input = %raw_input, "rejected lookup input: {}", err);
                session.address = None;
                session.state = LookupState::Error(err.user_message());
                return Err(err);
            }

            session.address = Some(address.to_string());
            session.state = LookupState::Loading;
            session.generation
        };

        tracing::info!(%address, generation, "looking up address");
        let outcome = self.client.lookup(address).await;

        let mut session = self.session.write().await;
        if session.generation != generation {
            tracing::debug!(
                %address,
                generation,
                current = session.generation,
                "discarding stale lookup result"
            );
            return Err(LookupError::Superseded);
        }

        match outcome {
            Ok(result) => {
                session.state = LookupState::Success(result.clone());
                Ok(result)
            }
            Err(e) => {
                let err = LookupError::from(e);
                tracing::warn!(%address, "lookup failed: {}", err);
                session.state = LookupState::Error(err.user_message());
                Err(err)
            }
        }
    }

    pub async fn clear(&self) {
        let mut session = self.session.write().await;
        session.generation += 1;
        session.address = None;
        session.state = LookupState::Idle;
    }
}

fn check_input(input: &str) -> Result<(), LookupError> {
    if input.is_empty() {
        Err(LookupError::EmptyInput)
    } else if !address::is_valid_ip(input) {
        Err(LookupError::InvalidFormat)
    } else {
        Ok(())
    }
}
