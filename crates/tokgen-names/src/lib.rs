#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! The token name list: the single source of truth the generator reads.
//!
//! One name per line, surrounding whitespace ignored, order preserved.

mod error;
mod loader;
mod name;

pub use error::LoadError;
pub use loader::{load_path, load_reader, normalize, split_lines, validate, Policy};
pub use name::{TokenName, TokenNames};
