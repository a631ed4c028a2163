//! Markup cleanup for model-written question text.

mod repair;
mod simplify;

pub use repair::repair;
pub use simplify::simplify;

/// Repair then simplify: the form every displayed field goes through.
pub fn clean(text: &str) -> String {
    simplify(&repair(text))
}
