// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod persona;
pub mod vocab;

pub use filters::{matches_category, matches_machine_ownership, matches_stash_buster, matches_time_budget};
pub use matcher::{MatchResult, Matcher};
pub use persona::classify;
