//! Domain model structs.
//!
//! Each submodule contains the serializable entity plus, where the database
//! representation differs, a crate-private `FromRow` row type that converts
//! into it.

pub mod asset;
pub mod favorite;
pub mod user;

pub use asset::Asset;
pub use favorite::Favorite;
pub use user::User;
