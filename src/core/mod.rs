pub mod base_service;
pub mod config;
pub mod persistence;
pub mod user_service;
pub mod validator;

pub use base_service::*;
pub use config::*;
pub use persistence::*;
pub use user_service::*;
pub use validator::*;
