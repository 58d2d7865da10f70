pub mod config;
pub mod user;

pub use config::*;
pub use user::*;
