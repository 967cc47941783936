// Security module for caller authentication and ownership checks
//
// This module resolves bearer credentials into caller identities and
// provides the ownership predicate that gates every mutation of a record.

pub mod authenticator;
pub mod bearer;
pub mod identity;
pub mod ownership;

pub use authenticator::{AuthError, Authenticator, StaticTokenAuthenticator};
pub use bearer::bearer_token;
pub use identity::Identity;
pub use ownership::{is_owner, require_ownership, Owned, OwnershipError};
