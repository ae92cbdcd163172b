//! Response types returned by the HTTP handlers.
//!
//! Every body carries a `success` flag and a human-readable message;
//! listing responses additionally carry the pagination descriptor.

mod error_response;
mod monitors;
mod pagination;
mod users;

pub use error_response::ErrorResponse;
pub use monitors::StatusMessage;
pub use pagination::PageInfo;
pub use users::{UserCreated, UserData, UserList};
