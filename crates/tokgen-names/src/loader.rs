use crate::error::LoadError;
use crate::name::{TokenName, TokenNames};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// How much checking the loader does after normalizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Reject an empty list, blank names and duplicates.
    #[default]
    Strict,
    /// Pass every line through untouched. Blank or repeated names end up
    /// in the generated code as-is.
    Permissive,
}

/// Split file contents into raw lines, terminators included.
///
/// A trailing terminator does not start another line, and empty text has
/// no lines at all.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_inclusive('\n')
}

/// Trim every raw line. One output per input, order and duplicates kept.
pub fn normalize<I, S>(lines: I) -> Vec<TokenName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, raw)| TokenName::new(raw.as_ref().trim(), index))
        .collect()
}

/// Checks applied under [`Policy::Strict`].
pub fn validate(names: &[TokenName]) -> Result<(), LoadError> {
    if names.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(names.len());
    for name in names {
        if name.text.is_empty() {
            return Err(LoadError::BlankName { line: name.line() });
        }
        if let Some(first_line) = seen.insert(name.as_str(), name.line()) {
            return Err(LoadError::Duplicate {
                name: name.text.clone(),
                first_line,
                line: name.line(),
            });
        }
    }
    Ok(())
}

/// Load a token list from any reader.
pub fn load_reader<R: Read>(reader: R, policy: Policy) -> Result<TokenNames, LoadError> {
    read_list(reader, Path::new("<reader>"), policy)
}

/// Load the token list stored at `path`.
pub fn load_path(path: impl AsRef<Path>, policy: Policy) -> Result<TokenNames, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| LoadError::unavailable(path, e))?;
    read_list(file, path, policy)
}

fn read_list<R: Read>(
    mut reader: R,
    origin: &Path,
    policy: Policy,
) -> Result<TokenNames, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| LoadError::unavailable(origin, e))?;

    let names = normalize(split_lines(&text));
    if policy == Policy::Strict {
        validate(&names)?;
    }

    tracing::debug!(
        origin = %origin.display(),
        count = names.len(),
        ?policy,
        "loaded token names"
    );
    Ok(TokenNames::from(names))
}
