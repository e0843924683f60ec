//! Plain-text rendering of the console view model.

use nodes_core::AppViewModel;

/// Renders one full frame for the view model.
///
/// The loading placeholder, the error banner, and the node table are
/// mutually exclusive. The search prompt closes the frame unless the
/// console is shutting down.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    out.push_str("\n== Nodes ==\n");

    if view.loading {
        out.push_str("Loading nodes...\n");
    } else if let Some(error) = &view.error {
        out.push_str(&format!("Error fetching nodes: {error}\n"));
    } else {
        render_table(&mut out, view);
    }

    if view.closing {
        out.push_str("Bye.\n");
    } else if view.search.trim().is_empty() {
        out.push_str("Search nodes (:q quits)> ");
    } else {
        out.push_str(&format!("Search nodes (:q quits) [{}]> ", view.search.trim()));
    }

    out
}

fn render_table(out: &mut String, view: &AppViewModel) {
    if view.rows.is_empty() {
        out.push_str("No matching nodes.\n");
    } else {
        let id_width = width_of("ID", view.rows.iter().map(|row| row.id.as_str()));
        let name_width = width_of("NAME", view.rows.iter().map(|row| row.name.as_str()));
        let chain_width = width_of("CHAIN", view.rows.iter().map(|row| row.evm_chain_id.as_str()));

        out.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:<chain_width$}  CREATED\n",
            "ID", "NAME", "CHAIN"
        ));
        for row in &view.rows {
            out.push_str(&format!(
                "{:<id_width$}  {:<name_width$}  {:<chain_width$}  {}\n",
                row.id, row.name, row.evm_chain_id, row.created_at
            ));
        }
    }

    out.push_str(&format!("{} of {} nodes\n", view.rows.len(), view.total));
}

fn width_of<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(str::len).fold(header.len(), usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodes_core::NodeRowView;

    fn row(id: &str, name: &str, chain: &str, created_at: &str) -> NodeRowView {
        NodeRowView {
            id: id.to_string(),
            name: name.to_string(),
            evm_chain_id: chain.to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn loading_frame_has_placeholder_only() {
        let view = AppViewModel {
            loading: true,
            ..AppViewModel::default()
        };

        let frame = render(&view);
        assert!(frame.contains("Loading nodes..."));
        assert!(!frame.contains("Error"));
        assert!(!frame.contains("of 0 nodes"));
    }

    #[test]
    fn error_frame_suppresses_table() {
        let view = AppViewModel {
            error: Some("http status 500: 500 Internal Server Error".to_string()),
            ..AppViewModel::default()
        };

        let frame = render(&view);
        assert!(frame.contains("Error fetching nodes: http status 500"));
        assert!(!frame.contains("Loading"));
        assert!(!frame.contains("CREATED"));
    }

    #[test]
    fn loaded_frame_lists_rows_in_order_with_counts() {
        let view = AppViewModel {
            rows: vec![
                row("b2", "Node B", "137", "2023-06-01 00:00:00 UTC"),
                row("a1", "Node A", "1", "2023-01-01 00:00:00 UTC"),
            ],
            total: 3,
            ..AppViewModel::default()
        };

        let frame = render(&view);
        let b2 = frame.find("b2").expect("b2 shown");
        let a1 = frame.find("a1").expect("a1 shown");
        assert!(b2 < a1);
        assert!(frame.contains("2 of 3 nodes"));
    }

    #[test]
    fn empty_match_still_shows_counts() {
        let view = AppViewModel {
            search: "zzz".to_string(),
            rows: Vec::new(),
            total: 3,
            ..AppViewModel::default()
        };

        let frame = render(&view);
        assert!(frame.contains("No matching nodes."));
        assert!(frame.contains("0 of 3 nodes"));
        assert!(frame.contains("[zzz]"));
    }
}
