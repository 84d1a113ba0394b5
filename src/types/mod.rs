mod field;
mod user;

pub use field::UserField;
pub use user::{User, UserDraft};
