//! Tenant scoping for the portal client.

/// The business identifier scoping every resource query.
///
/// Resolved once per sign-in by the session manager; list controllers
/// re-read it at the start of each operation and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BusinessId(pub String);

impl BusinessId {
    /// Convenience constructor from a string.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
