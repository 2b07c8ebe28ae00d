pub mod enums;

mod chat_record;
mod score;
mod tip;
mod user;

pub use chat_record::*;
pub use score::*;
pub use tip::*;
pub use user::*;
