#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Turns a token name list into the two C++ artifacts the assembler's
//! lexer and parser build against.
//!
//! Rendering is pure: a slice of names and a [`Layout`] in, a `String` out.
//! Writing the text anywhere is the caller's business.

mod layout;
mod predicates;
mod token_type;

pub use layout::{Layout, LICENSE_HEADER};
pub use predicates::render_predicates;
pub use token_type::render_token_type;

use tokgen_names::TokenName;

/// Both artifacts, rendered from the same list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Enumeration and `toStr` lookup.
    pub token_type: String,
    /// `is<Name>()` accessors.
    pub predicates: String,
}

pub fn generate(names: &[TokenName], layout: &Layout) -> Artifacts {
    let token_type = render_token_type(names, layout);
    let predicates = render_predicates(names, layout);
    tracing::debug!(
        tokens = names.len(),
        token_type_bytes = token_type.len(),
        predicates_bytes = predicates.len(),
        "rendered artifacts"
    );
    Artifacts {
        token_type,
        predicates,
    }
}
