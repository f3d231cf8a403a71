pub mod completions;
pub mod parse;
