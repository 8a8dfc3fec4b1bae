use serde::Serialize;

/// One entry of the token list.
///
/// `text` doubles as the enumeration constant and as its display string.
/// It is expected to be a valid identifier in the target language; nothing
/// here checks that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TokenName {
    pub text: String,
    /// 0-based position in the list; defines declaration order.
    pub index: usize,
}

impl TokenName {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// 1-based line in the source list.
    pub fn line(&self) -> usize {
        self.index + 1
    }
}

impl std::fmt::Display for TokenName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered token names from a single load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenNames {
    names: Vec<TokenName>,
}

impl TokenNames {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenName> {
        self.names.iter()
    }

    pub fn as_slice(&self) -> &[TokenName] {
        &self.names
    }

    /// Name texts in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(TokenName::as_str)
    }
}

impl From<Vec<TokenName>> for TokenNames {
    fn from(names: Vec<TokenName>) -> Self {
        Self { names }
    }
}

impl<'a> IntoIterator for &'a TokenNames {
    type Item = &'a TokenName;
    type IntoIter = std::slice::Iter<'a, TokenName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
