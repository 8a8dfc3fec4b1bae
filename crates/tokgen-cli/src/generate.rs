//! One batch run: load the list once, render both artifacts from it, write
//! them out one after the other.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tokgen_emit::Layout;
use tokgen_names::{load_path, Policy};

pub const DEFAULT_INPUT: &str = "tokens.txt";
pub const DEFAULT_TOKEN_TYPE_FILE: &str = "TokenType.hpp";
pub const DEFAULT_PREDICATES_FILE: &str = "Token.gen.hpp";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub token_type_file: PathBuf,
    pub predicates_file: PathBuf,
    pub policy: Policy,
    pub layout: Layout,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: PathBuf::from("."),
            token_type_file: PathBuf::from(DEFAULT_TOKEN_TYPE_FILE),
            predicates_file: PathBuf::from(DEFAULT_PREDICATES_FILE),
            policy: Policy::default(),
            layout: Layout::default(),
        }
    }
}

impl GenerateOptions {
    pub fn token_type_path(&self) -> PathBuf {
        self.out_dir.join(&self.token_type_file)
    }

    pub fn predicates_path(&self) -> PathBuf {
        self.out_dir.join(&self.predicates_file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub tokens: usize,
    pub token_type: ArtifactSummary,
    pub predicates: ArtifactSummary,
}

/// Run the generator.
///
/// On error, an artifact written before the failure may be left behind
/// truncated; callers must not consume it.
pub fn generate(opts: &GenerateOptions) -> Result<Report> {
    let names = load_path(&opts.input, opts.policy)?;
    let artifacts = tokgen_emit::generate(names.as_slice(), &opts.layout);

    let token_type = write_artifact(&opts.token_type_path(), &artifacts.token_type)?;
    let predicates = write_artifact(&opts.predicates_path(), &artifacts.predicates)?;

    Ok(Report {
        tokens: names.len(),
        token_type,
        predicates,
    })
}

// The file is closed when `out` drops, on the error paths too. Flushing
// explicitly keeps a failed final write from being lost in `Drop`.
fn write_artifact(path: &Path, text: &str) -> Result<ArtifactSummary> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .with_context(|| format!("failed to write {}", path.display()))?;

    let summary = ArtifactSummary {
        path: path.to_path_buf(),
        bytes: text.len(),
        sha256: sha256_hex(text),
    };
    tracing::info!(
        path = %summary.path.display(),
        bytes = summary.bytes,
        "wrote artifact"
    );
    Ok(summary)
}

/// SHA-256 of `data` as lowercase hex.
pub fn sha256_hex(data: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    format!("{:x}", hasher.finalize())
}
