//! Request types accepted by the HTTP handlers.

mod pagination;
mod users;

pub use pagination::{PageParams, PageRequest};
pub use users::CreateUser;
