pub mod matcher;
pub mod rules;
pub mod types;

pub use matcher::{VersionCmp, compare_versions, first_digit_run, match_inventory};
pub use rules::builtin_rules;
pub use types::{Finding, Rule, Severity};
