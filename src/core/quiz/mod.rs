//! Question pipeline: model reply → extracted candidates → normalized questions.

pub mod extract;
pub mod generate;
pub mod markup;
pub mod normalize;
pub mod prompts;
pub mod question;

pub use extract::extract;
pub use generate::{generate_battle, generate_practice};
pub use normalize::normalize_all;
pub use prompts::PracticeParams;
pub use question::{Batch, Question};
