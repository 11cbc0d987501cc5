use stockdesk_core::OwnerId;

/// Owner context for a request.
///
/// Derived from the bearer token and immutable for the request's lifetime.
/// Every domain route reads the owner from here and passes it explicitly to
/// the services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerContext {
    owner_id: OwnerId,
    email: Option<String>,
}

impl OwnerContext {
    pub fn new(owner_id: OwnerId, email: Option<String>) -> Self {
        Self { owner_id, email }
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
