//! Contapal - interactive word counter for text files
//!
//! Validates a path, reads the file, splits its content on whitespace and
//! reports the total word count plus the ten most frequent words.

pub mod cli;
pub mod counter;
pub mod formatters;
pub mod types;
pub mod ui;
pub mod validator;
