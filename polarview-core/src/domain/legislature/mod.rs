// polarview-core/src/domain/legislature/mod.rs

pub mod member;
pub mod term;

// Convenient re-exports to simplify imports elsewhere
pub use member::{MemberVote, Party, RawMemberVote};
pub use term::{TermWindow, TermYears};
