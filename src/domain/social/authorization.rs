use crate::domain::errors::DomainError;

/// The requester behind a call, resolved from the bearer token by the HTTP
/// layer and threaded explicitly into every use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    Authenticated(i64),
}

impl Actor {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Actor::Authenticated(_))
    }

    pub fn account_id(&self) -> Option<i64> {
        match self {
            Actor::Anonymous => None,
            Actor::Authenticated(id) => Some(*id),
        }
    }

    /// Weaker gate used by like/unlike: any authenticated actor passes,
    /// ownership is not consulted.
    pub fn require_authenticated(&self) -> Result<i64, DomainError> {
        self.account_id()
            .ok_or_else(|| DomainError::Forbidden("authentication required".to_string()))
    }
}

/// Mutating operations subject to the ownership decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutatingOperation {
    EditPost,
    DeletePost,
    DeleteComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Anything with a single authoring account.
pub trait Authored {
    fn author_id(&self) -> i64;
}

/// Ownership/authorization decision for mutating operations.
///
/// Decision table, in priority order:
/// 1. Unauthenticated actor: Deny.
/// 2. Actor is the configured super-admin: Allow, regardless of target.
/// 3. Actor authored the target: Allow.
/// 4. Otherwise: Deny.
///
/// Note the target for DeleteComment is the comment itself, so a post's
/// author is denied delete on another account's comment under their own
/// post. That asymmetry is deliberate.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationGuard {
    super_admin_id: i64,
}

impl AuthorizationGuard {
    pub fn new(super_admin_id: i64) -> Self {
        Self { super_admin_id }
    }

    pub fn authorize(
        &self,
        actor: Actor,
        operation: MutatingOperation,
        target: &dyn Authored,
    ) -> Decision {
        let Actor::Authenticated(actor_id) = actor else {
            return Decision::Deny;
        };
        if actor_id == self.super_admin_id {
            return Decision::Allow;
        }
        if actor_id == target.author_id() {
            return Decision::Allow;
        }
        tracing::debug!(
            actor_id,
            ?operation,
            target_author_id = target.author_id(),
            "authorization denied"
        );
        Decision::Deny
    }

    /// [`authorize`](Self::authorize) with Deny surfaced as
    /// [`DomainError::Forbidden`], for use at the top of mutating use cases.
    pub fn require(
        &self,
        actor: Actor,
        operation: MutatingOperation,
        target: &dyn Authored,
    ) -> Result<(), DomainError> {
        match self.authorize(actor, operation, target) {
            Decision::Allow => Ok(()),
            Decision::Deny => Err(DomainError::Forbidden(
                "you are not allowed to modify this resource".to_string(),
            )),
        }
    }
}
