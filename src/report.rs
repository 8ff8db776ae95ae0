use std::io::{self, Write};

use colored::Colorize;

use crate::domain::{ProjectStatus, SyncState};

/// Writes the two report tables in the order the statuses were collected:
/// branch/status overview first, change-count breakdown second. Rows for
/// projects that are not clean are rendered in red.
pub fn render<W: Write>(out: &mut W, statuses: &[ProjectStatus]) -> io::Result<()> {
    writeln!(out, "branch info")?;
    let mut branch_table = Table::new(&["project", "branch", "status"]);
    for status in statuses {
        branch_table.add_row(
            vec![
                status.project_name.clone(),
                status.branch_name.clone(),
                status.sync_state.as_str().to_string(),
            ],
            status.sync_state != SyncState::Clean,
        );
    }
    branch_table.write(out)?;

    writeln!(out, "modified info")?;
    let mut count_table = Table::new(&["project", "modified", "untracked", "deleted", "new"]);
    for status in statuses {
        count_table.add_row(
            vec![
                status.project_name.clone(),
                status.modified_count.to_string(),
                status.untracked_count.to_string(),
                status.deleted_count.to_string(),
                status.new_count.to_string(),
            ],
            false,
        );
    }
    count_table.write(out)
}

struct Table {
    headers: Vec<&'static str>,
    rows: Vec<(Vec<String>, bool)>,
}

impl Table {
    fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    fn add_row(&mut self, cells: Vec<String>, highlight: bool) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push((cells, highlight));
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = self
            .headers
            .iter()
            .map(|h| h.len())
            .collect::<Vec<usize>>();
        for (cells, _) in &self.rows {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let widths = self.column_widths();

        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<String>>()
            .join("  ");
        writeln!(out, "{}", header.bold())?;

        let rule = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<String>>()
            .join("  ");
        writeln!(out, "{rule}")?;

        for (cells, highlight) in &self.rows {
            // Pad to the final width first; coloring afterwards keeps the
            // ANSI escapes out of the alignment math.
            let row = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad(cell, *width))
                .collect::<Vec<String>>()
                .join("  ");
            if *highlight {
                writeln!(out, "{}", row.red())?;
            } else {
                writeln!(out, "{row}")?;
            }
        }
        writeln!(out)
    }
}

fn pad(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VcsKind;

    fn status(name: &str, branch: &str, sync_state: SyncState) -> ProjectStatus {
        ProjectStatus {
            project_name: name.to_string(),
            vcs_kind: VcsKind::Git,
            branch_name: branch.to_string(),
            sync_state,
            modified_count: 2,
            deleted_count: 0,
            new_count: 1,
            untracked_count: 3,
        }
    }

    fn render_plain(statuses: &[ProjectStatus]) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        render(&mut buffer, statuses).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn renders_both_tables_with_labels() {
        let output = render_plain(&[
            status("alpha", "main", SyncState::Clean),
            status("beta", "dev", SyncState::Modified),
        ]);

        assert!(output.contains("branch info"));
        assert!(output.contains("modified info"));
        assert!(output.contains("alpha"));
        assert!(output.contains("clean"));
        assert!(output.contains("beta"));
        assert!(output.contains("modified"));
    }

    #[test]
    fn keeps_rows_in_received_order() {
        let output = render_plain(&[
            status("zulu", "main", SyncState::Clean),
            status("alpha", "main", SyncState::Clean),
        ]);

        let zulu = output.find("zulu").unwrap();
        let alpha = output.find("alpha").unwrap();
        assert!(zulu < alpha);
    }

    #[test]
    fn pads_columns_to_the_widest_cell() {
        let output = render_plain(&[
            status("a-very-long-project-name", "main", SyncState::Clean),
            status("tiny", "main", SyncState::Clean),
        ]);

        let lines = output.lines().collect::<Vec<&str>>();
        let header = lines
            .iter()
            .find(|line| line.starts_with("project"))
            .unwrap();
        assert!(header.find("branch").unwrap() > "a-very-long-project-name".len());
    }
}
