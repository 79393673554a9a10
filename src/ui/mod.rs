pub mod messages;
pub mod prompt;

pub use prompt::{Prompter, Terminal};
