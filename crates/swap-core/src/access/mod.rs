//! Access control - who may do what to which object
//!
//! Predicates here are pure: they look only at ids and flags, never at the
//! request or the storage layer. List queries apply the same rules in SQL.

mod capabilities;

pub use capabilities::Capabilities;

use crate::entities::{Account, SwapRequest};
use crate::error::DomainError;
use crate::value_objects::Id;

/// The authenticated principal behind a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: Id,
    pub is_admin: bool,
}

impl Caller {
    pub const fn new(id: Id, is_admin: bool) -> Self {
        Self { id, is_admin }
    }
}

impl From<&Account> for Caller {
    fn from(account: &Account) -> Self {
        Self::new(account.id, account.is_admin)
    }
}

/// Object's owning account equals the caller
#[inline]
pub fn is_owner(owner_id: Id, caller: &Caller) -> bool {
    owner_id == caller.id
}

/// Caller is requester or recipient
#[inline]
pub fn is_participant(swap: &SwapRequest, caller: &Caller) -> bool {
    Capabilities::for_swap(swap, caller).is_participant()
}

#[inline]
pub fn is_admin(caller: &Caller) -> bool {
    caller.is_admin
}

/// Gate for admin-only operations
pub fn require_admin(caller: &Caller) -> Result<(), DomainError> {
    if is_admin(caller) {
        Ok(())
    } else {
        Err(DomainError::AdminRequired)
    }
}
