use std::path::Path;

use walkdir::WalkDir;

use crate::config::SearchConfig;
use crate::domain::{ProjectRoot, VcsKind};

/// Walks the tree under `config.root` and yields every directory containing a
/// known version-control marker, paired with the marker's kind.
///
/// The root counts as depth 1, so a marker whose parent sits deeper than
/// `config.depth` is out of budget. Marker directories themselves are never
/// entered; unknown marker names are ordinary directories and are descended
/// into. Unreadable entries are skipped with a warning so one inaccessible
/// subtree cannot abort the scan.
pub fn locate(config: &SearchConfig) -> impl Iterator<Item = ProjectRoot> + '_ {
    let mut walker = WalkDir::new(&config.root)
        .max_depth(config.depth)
        .into_iter();

    std::iter::from_fn(move || {
        loop {
            let entry = match walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("Warning: skipping unreadable path: {err}");
                    continue;
                }
            };
            // Depth 0 is the search root itself, not a marker candidate.
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if let Some(kind) = VcsKind::from_marker(name) {
                let project = entry
                    .path()
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| config.root.clone());
                walker.skip_current_dir();
                return Some(ProjectRoot::new(project, kind));
            }
        }
    })
}
