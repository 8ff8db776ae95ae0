pub mod project;

pub use project::{ProjectRoot, ProjectStatus, SyncState, VcsKind};
