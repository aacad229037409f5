// Application container.
//
// Wires config -> transport -> session and hands out list controllers
// that share both. Holds the provider subscription for its own
// lifetime, so dropping the app tears the callback down with it.

use std::sync::Arc;

use portal_auth::{IdentityProvider, ProviderSubscription, SessionManager};
use portal_core::{ApiTransport, ClientConfig, Resource};

use crate::list::ResourceListController;
use crate::transport::HttpTransport;

pub struct PortalApp {
    transport: Arc<dyn ApiTransport>,
    session: Arc<SessionManager>,
    _subscription: ProviderSubscription,
}

impl PortalApp {
    pub fn new(config: ClientConfig, provider: Arc<dyn IdentityProvider>) -> Self {
        let transport: Arc<dyn ApiTransport> = Arc::new(HttpTransport::new(config.clone()));
        Self::with_transport(config, transport, provider)
    }

    /// Construct against a custom transport (in-memory fakes in tests).
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn ApiTransport>,
        provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        let session = Arc::new(SessionManager::new(config, Arc::clone(&transport)));
        let subscription = session.attach(provider);
        Self {
            transport,
            session,
            _subscription: subscription,
        }
    }

    pub fn session(&self) -> Arc<SessionManager> {
        Arc::clone(&self.session)
    }

    /// A list controller for one entity collection, sharing this app's
    /// session and transport.
    pub fn controller<T: Resource>(&self) -> ResourceListController<T> {
        ResourceListController::new(Arc::clone(&self.session), Arc::clone(&self.transport))
    }
}
