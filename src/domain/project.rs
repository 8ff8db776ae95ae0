use std::path::{Path, PathBuf};

/// Marker directory names and the version-control kind they signal. Exact-name
/// match only; extend this table to teach the locator a new system.
const MARKER_KINDS: &[(&str, VcsKind)] = &[(".git", VcsKind::Git), (".svn", VcsKind::Svn)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcsKind {
    Git,
    Svn,
}

impl VcsKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Svn => "svn",
        }
    }

    pub fn from_marker(dir_name: &str) -> Option<Self> {
        MARKER_KINDS
            .iter()
            .find(|(marker, _)| *marker == dir_name)
            .map(|(_, kind)| *kind)
    }
}

/// Working-copy sync state. `Modified` is the conservative fallback: anything
/// not positively proven clean or committed-but-unpushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Clean,
    Committed,
    Modified,
}

impl SyncState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncState::Clean => "clean",
            SyncState::Committed => "committed",
            SyncState::Modified => "modified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStatus {
    pub project_name: String,
    pub vcs_kind: VcsKind,
    pub branch_name: String,
    pub sync_state: SyncState,
    pub modified_count: u32,
    pub deleted_count: u32,
    pub new_count: u32,
    pub untracked_count: u32,
}

/// A discovered project directory paired with the kind of marker found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    pub path: PathBuf,
    pub kind: VcsKind,
}

impl ProjectRoot {
    pub fn new(path: PathBuf, kind: VcsKind) -> Self {
        Self { path, kind }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Project name as shown in the report: the root directory's file name.
    pub fn project_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}
