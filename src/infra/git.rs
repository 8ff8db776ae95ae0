use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::{ProjectStatus, SyncState, VcsKind};
use crate::error::{AppError, AppResult};
use crate::services::VcsInspector;

const STATUS_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VcsInspector for GitCli {
    fn kind(&self) -> VcsKind {
        VcsKind::Git
    }

    async fn fetch_status(&self, root: &Path) -> AppResult<Vec<String>> {
        let output = tokio::time::timeout(
            STATUS_TIMEOUT,
            Command::new("git").arg("status").current_dir(root).output(),
        )
        .await
        .map_err(|_| {
            AppError::StatusFetch(format!("git status timed out in {}", root.display()))
        })?
        .map_err(|err| {
            AppError::StatusFetch(format!("could not run git in {}: {err}", root.display()))
        })?;

        if !output.status.success() {
            return Err(AppError::StatusFetch(format!(
                "git status exited with {} in {}",
                output.status,
                root.display()
            )));
        }

        let text = String::from_utf8(output.stdout).map_err(|err| {
            AppError::StatusFetch(format!(
                "git status emitted non-UTF-8 output in {}: {err}",
                root.display()
            ))
        })?;

        Ok(text.lines().map(str::to_string).collect())
    }

    fn parse_status(&self, lines: &[String], project_name: &str) -> ProjectStatus {
        let mut report = StatusReport::new(project_name);
        for line in lines {
            report.consume(line);
        }
        report.finish()
    }
}

/// Accumulator for one pass over `git status` output.
///
/// The text is human-oriented and varies across git versions, so classification
/// stays deliberately coarse: indentation decides whether a line is a section
/// header or a detail line, and only a handful of stable prefixes are
/// interpreted. Every other line falls through untouched; no input can make
/// the parse fail.
struct StatusReport {
    status: ProjectStatus,
    sync_state: Option<SyncState>,
    in_untracked: bool,
}

impl StatusReport {
    fn new(project_name: &str) -> Self {
        Self {
            status: ProjectStatus {
                project_name: project_name.to_string(),
                vcs_kind: VcsKind::Git,
                branch_name: String::new(),
                sync_state: SyncState::Modified,
                modified_count: 0,
                deleted_count: 0,
                new_count: 0,
                untracked_count: 0,
            },
            sync_state: None,
            in_untracked: false,
        }
    }

    fn consume(&mut self, raw: &str) {
        // Branch-listing modes mark the current branch with a leading star.
        let line = raw.strip_prefix('*').unwrap_or(raw);
        let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
        if line.trim().is_empty() {
            return;
        }

        if line.starts_with(char::is_whitespace) {
            self.consume_detail(line.trim());
        } else {
            self.consume_header(line);
        }
    }

    /// Indented lines: per-file entries and parenthetical "(use git ... to ...)"
    /// hints under whichever section header came last.
    fn consume_detail(&mut self, line: &str) {
        if line.starts_with('(') {
            // The push hint is the only signal git gives for local commits
            // that exist but are not published yet.
            if line.contains("git push") && line.contains("publish your local commits") {
                self.set_sync_state(SyncState::Committed);
            }
        } else if self.in_untracked {
            self.status.untracked_count += 1;
        } else if line.starts_with("modified:") {
            self.status.modified_count += 1;
        } else if line.starts_with("deleted:") {
            self.status.deleted_count += 1;
        } else if line.starts_with("new file:") {
            self.status.new_count += 1;
        }
    }

    /// Non-indented lines: section headers and summary lines. Any of them ends
    /// an open untracked-files block.
    fn consume_header(&mut self, line: &str) {
        self.in_untracked = false;
        if line.starts_with('(') {
            return;
        }
        if line.starts_with("On branch") {
            if let Some(name) = line.split_whitespace().last() {
                self.status.branch_name = name.to_string();
            }
        } else if line.starts_with("nothing to commit") {
            self.set_sync_state(SyncState::Clean);
        } else if line.starts_with("Untracked files:") {
            self.in_untracked = true;
        }
    }

    /// First positive determination wins: the push hint can precede or follow
    /// the "nothing to commit" summary depending on the git version, and a
    /// Committed verdict must not be downgraded to Clean.
    fn set_sync_state(&mut self, state: SyncState) {
        self.sync_state.get_or_insert(state);
    }

    fn finish(mut self) -> ProjectStatus {
        self.status.sync_state = self.sync_state.unwrap_or(SyncState::Modified);
        self.status
    }
}
