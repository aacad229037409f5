//! portal-core: transport-agnostic core for the portal client SDK.

pub mod config;
pub mod error;
pub mod query;
pub mod resource;
pub mod tenant;
pub mod transport;

pub use config::ClientConfig;
pub use error::{PortalError, PortalResult};
pub use query::{ListFilters, Page, Pagination};
pub use resource::{Draft, Resource};
pub use tenant::BusinessId;
pub use transport::{ApiRequest, ApiResponse, ApiTransport, HttpMethod};
