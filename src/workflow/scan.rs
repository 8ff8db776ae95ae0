use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::config::SearchConfig;
use crate::domain::{ProjectRoot, ProjectStatus};
use crate::error::{AppError, AppResult};
use crate::infra::locator;
use crate::services::{InspectorRegistry, VcsInspector};

/// Upper bound on concurrently running status subprocesses.
const MAX_IN_FLIGHT: usize = 8;

/// Discovers projects under the configured root and inspects each one.
///
/// Projects are fetched and parsed on independent tasks with bounded
/// parallelism; results come back in discovery order because the handles are
/// awaited in spawn order. A project whose kind has no registered inspector,
/// or whose status fetch fails, is skipped with a warning. Once the scan has
/// started, nothing short of a panicking task aborts it.
pub async fn scan_projects(
    config: &SearchConfig,
    registry: &InspectorRegistry,
) -> AppResult<Vec<ProjectStatus>> {
    let semaphore = Arc::new(Semaphore::new(MAX_IN_FLIGHT));
    let mut handles: Vec<JoinHandle<AppResult<ProjectStatus>>> = Vec::new();

    for root in locator::locate(config) {
        let Some(inspector) = registry.get(root.kind) else {
            eprintln!(
                "Warning: skipping {}: no inspector for {}",
                root.path().display(),
                root.kind.as_str()
            );
            continue;
        };

        let semaphore = Arc::clone(&semaphore);
        handles.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|err| AppError::StatusFetch(err.to_string()))?;
            inspect_project(inspector, root).await
        }));
    }

    let mut statuses = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(Ok(status)) => statuses.push(status),
            Ok(Err(err)) => eprintln!("Warning: skipping project: {err}"),
            Err(err) => eprintln!("Warning: status task failed: {err}"),
        }
    }

    Ok(statuses)
}

async fn inspect_project(
    inspector: Arc<dyn VcsInspector>,
    root: ProjectRoot,
) -> AppResult<ProjectStatus> {
    let lines = inspector.fetch_status(root.path()).await?;
    Ok(inspector.parse_status(&lines, &root.project_name()))
}
