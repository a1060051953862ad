//! Ownership rules applied before every mutating operation.

use crate::domain::UserId;
use crate::error::DomainError;

/// Require an authenticated actor.
pub fn require_actor(actor: Option<&UserId>) -> Result<&UserId, DomainError> {
    actor.ok_or(DomainError::Unauthorized)
}

/// Allow the mutation only when `actor` is the owner of the resource.
pub fn authorize_owner<'a>(
    actor: Option<&'a UserId>,
    owner: &UserId,
) -> Result<&'a UserId, DomainError> {
    let actor = require_actor(actor)?;
    if actor != owner {
        return Err(DomainError::Unauthorized);
    }
    Ok(actor)
}
