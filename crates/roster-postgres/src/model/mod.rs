//! Database models for all entities in the system.

mod user;

pub use user::{NewUser, User};
