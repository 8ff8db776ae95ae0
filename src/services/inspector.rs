use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ProjectStatus, VcsKind};
use crate::error::AppResult;

/// Capability interface for one version-control system: obtain the raw status
/// text for a project root, and turn that text into a structured record.
#[async_trait]
pub trait VcsInspector: Send + Sync {
    fn kind(&self) -> VcsKind;

    /// Raw status report lines, typically a subprocess's stdout.
    async fn fetch_status(&self, root: &Path) -> AppResult<Vec<String>>;

    /// Pure classification of the fetched lines; must accept any input.
    fn parse_status(&self, lines: &[String], project_name: &str) -> ProjectStatus;
}

/// Inspectors keyed by kind. A kind the locator can detect but that has no
/// registered inspector is skipped by the pipeline, not an error.
#[derive(Default)]
pub struct InspectorRegistry {
    inspectors: HashMap<VcsKind, Arc<dyn VcsInspector>>,
}

impl InspectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, inspector: Arc<dyn VcsInspector>) {
        self.inspectors.insert(inspector.kind(), inspector);
    }

    pub fn get(&self, kind: VcsKind) -> Option<Arc<dyn VcsInspector>> {
        self.inspectors.get(&kind).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SyncState;

    struct FakeInspector;

    #[async_trait]
    impl VcsInspector for FakeInspector {
        fn kind(&self) -> VcsKind {
            VcsKind::Git
        }

        async fn fetch_status(&self, _root: &Path) -> AppResult<Vec<String>> {
            Ok(Vec::new())
        }

        fn parse_status(&self, _lines: &[String], project_name: &str) -> ProjectStatus {
            ProjectStatus {
                project_name: project_name.to_string(),
                vcs_kind: VcsKind::Git,
                branch_name: String::new(),
                sync_state: SyncState::Modified,
                modified_count: 0,
                deleted_count: 0,
                new_count: 0,
                untracked_count: 0,
            }
        }
    }

    #[test]
    fn registry_dispatches_by_kind() {
        let mut registry = InspectorRegistry::new();
        registry.register(Arc::new(FakeInspector));

        assert!(registry.get(VcsKind::Git).is_some());
        assert!(registry.get(VcsKind::Svn).is_none());
    }
}
