use pretty_assertions::assert_eq;
use tokgen_emit::{generate, render_predicates, render_token_type, Layout, LICENSE_HEADER};
use tokgen_names::{normalize, TokenName};

fn scenario() -> Vec<TokenName> {
    normalize(["PLUS\n", " MINUS ", "\tSTAR\n"])
}

/// `(constant, string)` pairs of every `case` line, in order.
fn lookup_cases(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|l| l.trim().strip_prefix("case "))
        .map(|rest| {
            let (constant, ret) = rest.split_once(": return ").unwrap();
            let literal = ret.trim_end_matches(';').trim_matches('"');
            (constant.to_string(), literal.to_string())
        })
        .collect()
}

/// `(accessor, constant)` pairs from the predicates artifact, in order.
fn accessors(text: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, l)| {
            let name = l.trim().strip_prefix("inline bool ")?.strip_suffix("() const")?;
            let body = lines[i + 2].trim();
            let constant = body
                .strip_prefix("return TokenType::")?
                .strip_suffix(" == type_;")?;
            Some((name.to_string(), constant.to_string()))
        })
        .collect()
}

#[test]
fn enumeration_artifact_for_scenario() {
    let text = render_token_type(&scenario(), &Layout::default());
    let expected = format!(
        "{LICENSE_HEADER}
#ifndef ATOM_ASSEMBLER_TOKENTYPE_HPP_INCLUDED
#define ATOM_ASSEMBLER_TOKENTYPE_HPP_INCLUDED

namespace atom
{{

namespace assembler
{{

namespace TokenType
{{
    enum type
    {{
        PLUS,
        MINUS,
        STAR,
    }};

    inline char const* toStr(type t)
    {{
        switch(t)
        {{
            case PLUS: return \"PLUS\";
            case MINUS: return \"MINUS\";
            case STAR: return \"STAR\";
            default: return \"<INVALID TOKEN TYPE>\";
        }}
    }}
}}

}}

}}

#endif
"
    );
    assert_eq!(text, expected);
}

#[test]
fn predicates_artifact_for_scenario() {
    let text = render_predicates(&scenario(), &Layout::default());
    let expected = "    inline bool isPLUS() const
    {
        return TokenType::PLUS == type_;
    }

    inline bool isMINUS() const
    {
        return TokenType::MINUS == type_;
    }

    inline bool isSTAR() const
    {
        return TokenType::STAR == type_;
    }

";
    assert_eq!(text, expected);
}

#[test]
fn lookup_maps_every_constant_to_its_own_name() {
    let names = normalize(["Invalid", "Eof", "Comma", "LSquare", "RSquare", "Gt"]);
    let text = render_token_type(&names, &Layout::default());

    let cases = lookup_cases(&text);
    assert_eq!(cases.len(), names.len());
    for (name, (constant, literal)) in names.iter().zip(&cases) {
        assert_eq!(&name.text, constant);
        assert_eq!(constant, literal);
    }
    assert_eq!(text.matches("default: return").count(), 1);
}

#[test]
fn accessors_reference_only_their_own_constant() {
    let names = normalize(["Store", "In", "To", "With", "Aat"]);
    let artifacts = generate(&names, &Layout::default());
    let pairs = accessors(&artifacts.predicates);

    assert_eq!(pairs.len(), names.len());
    for (name, (accessor, constant)) in names.iter().zip(&pairs) {
        assert_eq!(accessor, &format!("is{}", name.text));
        assert_eq!(constant, &name.text);
    }
}

#[test]
fn both_artifacts_agree_on_names_and_order() {
    let names = normalize(["Send", "If1", "Ifnot1", "Ret", "RetRes"]);
    let artifacts = generate(&names, &Layout::default());

    let from_lookup: Vec<String> = lookup_cases(&artifacts.token_type)
        .into_iter()
        .map(|(c, _)| c)
        .collect();
    let from_predicates: Vec<String> = accessors(&artifacts.predicates)
        .into_iter()
        .map(|(_, c)| c)
        .collect();
    assert_eq!(from_lookup, from_predicates);
}

#[test]
fn rendering_is_deterministic() {
    let names = normalize(["Var", "Halt", "Iexh", "Raise", "Jmp", "Set"]);
    let layout = Layout::default();
    assert_eq!(generate(&names, &layout), generate(&names, &layout));
}

#[test]
fn single_token() {
    let artifacts = generate(&normalize(["Eof"]), &Layout::default());
    assert_eq!(
        lookup_cases(&artifacts.token_type),
        vec![("Eof".to_string(), "Eof".to_string())]
    );
    assert_eq!(accessors(&artifacts.predicates).len(), 1);
}

#[test]
fn global_namespace_layout() {
    let layout = Layout::default().with_namespace_path("");
    let text = render_token_type(&normalize(["Eof"]), &layout);

    assert!(!text.contains("namespace atom"));
    assert!(text.contains("#ifndef TOKENTYPE_HPP_INCLUDED\n"));
    assert!(text.ends_with("    }\n}\n\n#endif\n"));
}
