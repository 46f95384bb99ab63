pub mod allocations_service;
pub mod user_service;

pub use allocations_service::*;
pub use user_service::*;
