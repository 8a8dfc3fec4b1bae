//! Names baked into the generated C++ text.

/// License block that opens the enumeration artifact, verbatim.
pub const LICENSE_HEADER: &str = "\
/**
 * This file is part of the Atom VM.
 *
 * Copyright (C) 2010, Emir Uner
 *
 * This program is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License v2 as published by
 * the Free Software Foundation with the exceptions specified in COPYING file.
 */
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Enclosing namespaces, outermost first.
    pub namespaces: Vec<String>,
    /// Scope holding the enum and `toStr`; also the qualifier used by the
    /// predicates.
    pub scope: String,
    pub enum_name: String,
    /// Returned by `toStr` for values outside the declared constants.
    pub sentinel: String,
    /// Member the predicates compare against.
    pub field: String,
    /// Explicit include guard. Derived from the namespaces when `None`.
    pub guard: Option<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            namespaces: vec!["atom".to_string(), "assembler".to_string()],
            scope: "TokenType".to_string(),
            enum_name: "type".to_string(),
            sentinel: "<INVALID TOKEN TYPE>".to_string(),
            field: "type_".to_string(),
            guard: None,
        }
    }
}

impl Layout {
    /// Replace the namespaces with a `::`-separated path such as
    /// `atom::assembler`. Empty segments are dropped.
    pub fn with_namespace_path(mut self, path: &str) -> Self {
        self.namespaces = path
            .split("::")
            .map(str::trim)
            .filter(|seg| !seg.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    pub fn with_guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    /// `ATOM_ASSEMBLER_TOKENTYPE_HPP_INCLUDED` for the default layout.
    pub fn guard(&self) -> String {
        if let Some(guard) = &self.guard {
            return guard.clone();
        }
        self.namespaces
            .iter()
            .map(String::as_str)
            .chain([self.scope.as_str(), "HPP", "INCLUDED"])
            .map(str::to_ascii_uppercase)
            .collect::<Vec<_>>()
            .join("_")
    }
}
