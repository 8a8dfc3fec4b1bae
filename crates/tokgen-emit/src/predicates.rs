//! `Token.gen.hpp`: one `is<Name>()` accessor per token, meant to be
//! `#include`d inside the hand-written `Token` class body.

use crate::layout::Layout;
use tokgen_names::TokenName;

pub fn render_predicates(names: &[TokenName], layout: &Layout) -> String {
    let mut out = String::with_capacity(names.len() * 96);
    for name in names {
        push_predicate(&mut out, name, layout);
    }
    out
}

fn push_predicate(out: &mut String, name: &TokenName, layout: &Layout) {
    out.push_str(&format!("    inline bool is{name}() const\n"));
    out.push_str("    {\n");
    out.push_str(&format!(
        "        return {}::{name} == {};\n",
        layout.scope, layout.field
    ));
    out.push_str("    }\n\n");
}
