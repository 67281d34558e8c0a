//! Per-object capability flags

use bitflags::bitflags;

use super::Caller;
use crate::entities::SwapRequest;
use crate::error::DomainError;
use crate::value_objects::Id;

bitflags! {
    /// Relationship between a caller and one object
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Caller owns the object
        const OWNER     = 1 << 0;
        /// Caller sent the swap request
        const REQUESTER = 1 << 1;
        /// Caller received the swap request
        const RECIPIENT = 1 << 2;
        /// Caller is a site administrator
        const ADMIN     = 1 << 3;

        const PARTICIPANT = Self::REQUESTER.bits() | Self::RECIPIENT.bits();
    }
}

impl Capabilities {
    fn base(caller: &Caller) -> Self {
        if caller.is_admin {
            Self::ADMIN
        } else {
            Self::empty()
        }
    }

    /// Capabilities over an object with a single owning account
    pub fn for_owned(owner_id: Id, caller: &Caller) -> Self {
        let mut caps = Self::base(caller);
        caps.set(Self::OWNER, owner_id == caller.id);
        caps
    }

    /// Capabilities over a swap request
    pub fn for_swap(swap: &SwapRequest, caller: &Caller) -> Self {
        let mut caps = Self::base(caller);
        caps.set(Self::REQUESTER, swap.requester_id == caller.id);
        caps.set(Self::RECIPIENT, swap.recipient_id == caller.id);
        caps
    }

    #[inline]
    pub fn is_participant(self) -> bool {
        self.intersects(Self::PARTICIPANT)
    }

    /// Succeed when any of `needed` is held, else build the error.
    ///
    /// `ADMIN` is an ordinary flag here and bypasses nothing.
    pub fn require_any(self, needed: Self, err: impl FnOnce() -> DomainError) -> Result<(), DomainError> {
        if self.intersects(needed) {
            Ok(())
        } else {
            Err(err())
        }
    }
}
