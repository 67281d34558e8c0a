//! # swap-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services borrow a [`ServiceContext`] holding the repository ports and the
//! token service, so the same code runs against PostgreSQL in production and
//! in-memory fakes in tests.

pub mod dto;
pub mod services;

pub use services::{ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
