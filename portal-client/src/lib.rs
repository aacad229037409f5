//! portal-client: HTTP transport, list controllers, and entities for
//! the Trade-Ezy business portal.

pub mod app;
pub mod entities;
pub mod list;
pub mod transport;

pub use app::PortalApp;
pub use entities::{Booking, BusinessAccount, ChatMessage, ServiceDraft, ServiceOffering};
pub use list::{
    DeleteConfirmation, LoadOutcome, MutationKind, MutationRecord, MutationStatus,
    ResourceListController,
};
pub use transport::HttpTransport;
