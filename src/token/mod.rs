// Public exports.
pub use token::Token;
pub use tokenizer::{depth, strip_comments, tokenize, Tokens};

// Public mods.
pub mod token;

#[cfg(feature = "cli")]
pub mod cli_helper;
#[cfg(feature = "cli")]
pub mod cli_stream;

// Private mods.
mod tokenizer;
