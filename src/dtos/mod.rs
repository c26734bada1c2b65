mod page;
mod project;
mod query;
mod task;

pub use page::*;
pub use project::*;
pub use query::*;
pub use task::*;

/// Escape LIKE wildcards in user input to prevent pattern injection.
pub(crate) fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
