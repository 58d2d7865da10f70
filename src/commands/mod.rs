pub mod check_email;
pub mod demo;

pub use check_email::*;
pub use demo::*;
