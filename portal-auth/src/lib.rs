//! portal-auth: session lifecycle for the portal client SDK.

pub mod provider;
pub mod session;

pub use provider::{
    Identity, IdentityListener, IdentityProvider, ListenerId, ProviderSubscription,
};
pub use session::{SessionManager, SessionState};
