//! Model to entity mappers
//!
//! `From`/`TryFrom` impls turning database rows into domain objects.

mod account;
mod skill;
mod swap_request;

pub use account::public_profile;
pub use swap_request::convert_all;
