#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

pub mod generate;
pub mod logging;

pub use generate::{generate, ArtifactSummary, GenerateOptions, Report};
