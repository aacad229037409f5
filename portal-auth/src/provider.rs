// Identity provider seam.
//
// The external identity provider (Firebase-style) is injected as an
// opaque capability: it notifies listeners of sign-in state changes
// and mints short-lived bearer tokens on demand. The SDK never holds
// credentials itself.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

/// A signed-in identity. Token retrieval may fail at any time (expired
/// session, provider outage); callers treat failures as "no token".
#[async_trait]
pub trait Identity: Send + Sync {
    /// Mint a fresh bearer token for this identity.
    async fn id_token(&self) -> Result<String>;
}

/// Receives sign-in state changes from the provider.
///
/// `None` means signed out. The provider delivers events on the
/// application's single event loop, one at a time.
#[async_trait]
pub trait IdentityListener: Send + Sync {
    async fn identity_changed(&self, identity: Option<Arc<dyn Identity>>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

static LISTENER_ID: AtomicU64 = AtomicU64::new(1);

impl ListenerId {
    pub fn next() -> Self {
        ListenerId(LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The provider capability: subscribe/unsubscribe listeners.
pub trait IdentityProvider: Send + Sync {
    fn subscribe(&self, listener: Arc<dyn IdentityListener>) -> ListenerId;
    fn unsubscribe(&self, id: ListenerId);
}

/// Scoped listener registration. Dropping the subscription releases it,
/// so re-initializing a session manager never leaks callbacks.
pub struct ProviderSubscription {
    provider: Arc<dyn IdentityProvider>,
    id: Option<ListenerId>,
}

impl ProviderSubscription {
    pub fn new(provider: Arc<dyn IdentityProvider>, id: ListenerId) -> Self {
        Self {
            provider,
            id: Some(id),
        }
    }

    /// Release the subscription explicitly.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(id) = self.id.take() {
            self.provider.unsubscribe(id);
        }
    }
}

impl Drop for ProviderSubscription {
    fn drop(&mut self) {
        self.release_inner();
    }
}
