//! Domain primitives, ports and services.
//!
//! Purpose: define the transport-agnostic user model and the CRUD service
//! that inbound adapters call. Framework types (Actix, Diesel) never appear
//! here.
//!
//! Public surface:
//! - Error / ErrorCode — domain failure payload and stable category code.
//! - TraceId — request-scoped correlation identifier.
//! - User / UserId / UserName — the persisted user and its components.
//! - UserService — implementation of the `UsersQuery` and `UsersCommand` ports.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserName, UserValidationError};
pub use self::user_service::UserService;
