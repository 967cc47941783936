//! Ownership checks for owner-scoped records.
//!
//! Mutating a record is allowed only for the identity that owns it. The
//! check is a pure function over the caller and the record so it can be
//! exercised without any HTTP machinery.

use super::identity::Identity;

/// A record that carries a single owner.
pub trait Owned {
    /// The identifier of the record, used in error reporting.
    fn record_id(&self) -> &str;

    /// The identity that owns the record.
    fn owner(&self) -> &Identity;
}

/// Raised when a caller tries to act on a record owned by someone else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{caller}' does not own record '{record_id}'")]
pub struct OwnershipError {
    pub record_id: String,
    pub caller: Identity,
}

/// Returns true when `identity` owns `record`.
pub fn is_owner<R: Owned + ?Sized>(identity: &Identity, record: &R) -> bool {
    record.owner() == identity
}

/// Checks that `identity` owns `record`.
///
/// # Returns
///
/// * `Ok(())` - The caller owns the record
/// * `Err(OwnershipError)` - The record belongs to another identity
pub fn require_ownership<R: Owned + ?Sized>(
    identity: &Identity,
    record: &R,
) -> Result<(), OwnershipError> {
    if is_owner(identity, record) {
        Ok(())
    } else {
        Err(OwnershipError {
            record_id: record.record_id().to_string(),
            caller: identity.clone(),
        })
    }
}
