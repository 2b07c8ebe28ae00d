//! Repository layer: entity-scoped database operations.
//!
//! All public functions are re-exported here so callers can use
//! `db::list_tips` without caring about the sub-module split.

mod chat;
mod score;
mod tip;
mod user;

pub use chat::*;
pub use score::*;
pub use tip::*;
pub use user::*;
