pub mod allocation;
pub mod user;

pub use allocation::*;
pub use user::*;
