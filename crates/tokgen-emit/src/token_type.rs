//! `TokenType.hpp`: the enumeration plus its `toStr` lookup.

use crate::layout::{Layout, LICENSE_HEADER};
use tokgen_names::TokenName;

pub fn render_token_type(names: &[TokenName], layout: &Layout) -> String {
    let guard = layout.guard();
    let mut out = String::with_capacity(1024 + names.len() * 64);

    out.push_str(LICENSE_HEADER);
    out.push('\n');
    out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));

    for ns in &layout.namespaces {
        out.push_str(&format!("namespace {ns}\n{{\n\n"));
    }

    out.push_str(&format!("namespace {}\n{{\n", layout.scope));
    push_enum(&mut out, names, layout);
    out.push('\n');
    push_lookup(&mut out, names, layout);
    out.push_str("}\n");

    for _ in &layout.namespaces {
        out.push_str("\n}\n");
    }
    out.push_str("\n#endif\n");
    out
}

fn push_enum(out: &mut String, names: &[TokenName], layout: &Layout) {
    out.push_str(&format!("    enum {}\n    {{\n", layout.enum_name));
    for name in names {
        out.push_str(&format!("        {name},\n"));
    }
    out.push_str("    };\n");
}

// Total over the enum's value range: anything undeclared hits `default`.
fn push_lookup(out: &mut String, names: &[TokenName], layout: &Layout) {
    out.push_str(&format!(
        "    inline char const* toStr({} t)\n    {{\n        switch(t)\n        {{\n",
        layout.enum_name
    ));
    for name in names {
        out.push_str(&format!("            case {name}: return \"{name}\";\n"));
    }
    out.push_str(&format!(
        "            default: return \"{}\";\n",
        layout.sentinel
    ));
    out.push_str("        }\n    }\n");
}
