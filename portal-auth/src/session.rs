// Session manager.
//
// Owns the authenticated-identity lifecycle: observes provider events,
// exchanges the identity's bearer token for a backend-scoped business
// id, and exposes identity + tenant scope to the rest of the SDK.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use portal_core::{
    ApiRequest, ApiTransport, BusinessId, ClientConfig, HttpMethod, PortalError, PortalResult,
};

use crate::provider::{Identity, IdentityListener, IdentityProvider, ProviderSubscription};

/// Session lifecycle.
///
/// `SignedOut → Resolving → Ready` when tenant resolution succeeds,
/// `SignedOut → Resolving → Degraded` when it fails (the identity stays
/// signed in, but tenant-scoped requests are blocked). Sign-out returns
/// to `SignedOut` from any state, synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    SignedOut,
    Resolving,
    Ready(BusinessId),
    Degraded,
}

pub struct SessionManager {
    config: ClientConfig,
    transport: Arc<dyn ApiTransport>,
    identity: RwLock<Option<Arc<dyn Identity>>>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    pub fn new(config: ClientConfig, transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            config,
            transport,
            identity: RwLock::new(None),
            state: RwLock::new(SessionState::SignedOut),
        }
    }

    /// Register with the provider; the returned subscription keeps the
    /// callback alive and releases it on drop.
    pub fn attach(self: &Arc<Self>, provider: Arc<dyn IdentityProvider>) -> ProviderSubscription {
        let id = provider.subscribe(Arc::clone(self) as Arc<dyn IdentityListener>);
        ProviderSubscription::new(provider, id)
    }

    /// Drive the state machine for one provider event.
    ///
    /// Issues exactly one tenant-resolution request per sign-in and
    /// none at all on sign-out.
    pub async fn handle_identity_change(&self, identity: Option<Arc<dyn Identity>>) {
        let Some(identity) = identity else {
            *self.identity.write().unwrap() = None;
            *self.state.write().unwrap() = SessionState::SignedOut;
            debug!("session signed out");
            return;
        };

        *self.identity.write().unwrap() = Some(Arc::clone(&identity));
        *self.state.write().unwrap() = SessionState::Resolving;

        let token = match identity.id_token().await {
            Ok(token) => token,
            Err(err) => {
                warn!("token retrieval failed, session degraded: {err}");
                *self.state.write().unwrap() = SessionState::Degraded;
                return;
            }
        };

        match self.resolve_business_id(&token).await {
            Ok(business_id) => {
                debug!("tenant resolved: {business_id}");
                *self.state.write().unwrap() = SessionState::Ready(business_id);
            }
            Err(err) => {
                // Not fatal: the user stays signed in without a usable
                // tenant scope, and downstream requests are blocked.
                warn!("tenant resolution failed, session degraded: {err}");
                *self.state.write().unwrap() = SessionState::Degraded;
            }
        }
    }

    async fn resolve_business_id(&self, token: &str) -> PortalResult<BusinessId> {
        let request =
            ApiRequest::new(HttpMethod::Get, self.config.tenant_path.clone()).with_bearer(token);
        let body = self.transport.send(request).await?.into_success()?;

        body.get("business_id")
            .and_then(Value::as_str)
            .map(BusinessId::new)
            .ok_or_else(|| PortalError::network("tenant response missing business_id"))
    }

    /// A fresh bearer token for the current identity, or `None` when
    /// unauthenticated. Fails soft: retrieval errors are logged and
    /// reported as `None`, never raised.
    pub async fn id_token(&self) -> Option<String> {
        let identity = self.identity.read().unwrap().clone()?;
        match identity.id_token().await {
            Ok(token) => Some(token),
            Err(err) => {
                warn!("token retrieval failed: {err}");
                None
            }
        }
    }

    pub fn business_id(&self) -> Option<BusinessId> {
        match &*self.state.read().unwrap() {
            SessionState::Ready(id) => Some(id.clone()),
            _ => None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.read().unwrap().is_some()
    }
}

#[async_trait]
impl IdentityListener for SessionManager {
    async fn identity_changed(&self, identity: Option<Arc<dyn Identity>>) {
        self.handle_identity_change(identity).await;
    }
}
