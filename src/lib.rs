//! usersvc - bounded in-process user record service
//!
//! A fixed-capacity collection of user records with create, read, update,
//! delete and list operations, layered over a small lifecycle holder that
//! tracks a configuration path and an initialized flag.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (demo, check-email)
//! - **core**: Validator, base service, user service, persistence hooks
//! - **models**: Data structures (config, user)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Result, UserServiceError};
