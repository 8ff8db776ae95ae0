use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const DEFAULT_SEARCH_DEPTH: usize = 2;

/// Immutable search parameters, resolved once from the command line and passed
/// through the pipeline. The root directory itself counts as depth 1.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub root: PathBuf,
    pub depth: usize,
}

impl SearchConfig {
    pub fn resolve(path: Option<PathBuf>, depth: Option<usize>) -> AppResult<Self> {
        let candidate = match path {
            Some(path) => path,
            None => std::env::current_dir()?,
        };

        let root = resolve_root(&candidate)?;
        Ok(Self {
            root,
            depth: depth.unwrap_or(DEFAULT_SEARCH_DEPTH),
        })
    }
}

/// A file argument resolves to its containing directory; anything that is
/// neither an existing directory nor an existing file is an invalid invocation.
fn resolve_root(candidate: &Path) -> AppResult<PathBuf> {
    let root = if candidate.is_dir() {
        candidate.to_path_buf()
    } else if candidate.is_file() {
        match candidate.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    } else {
        return Err(AppError::InvalidInvocation(format!(
            "path does not exist: {}",
            candidate.display()
        )));
    };

    Ok(std::fs::canonicalize(&root)?)
}
