// ABOUTME: Grade table adapter: snapshots row nodes and applies normalizer directives to them.
// ABOUTME: Row ids are positions in the node slice the snapshot was taken from.

use dom_query::NodeRef;
use qis_grades::{Action, ColumnLayout, Directive, GradeRow};

use super::style::set_style_property;
use super::{element_children, normalized_text};

/// Takes a text snapshot of the given row nodes.
pub fn snapshot_rows(rows: &[NodeRef<'_>]) -> Vec<GradeRow> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let classes = row
                .attr("class")
                .map(|c| c.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default();
            let cells = element_children(row).iter().map(normalized_text).collect();
            GradeRow::new(i, classes, cells)
        })
        .collect()
}

/// Counts of the mutations performed by [`apply_directives`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    pub removed: usize,
    pub painted: usize,
}

/// Applies directives to the row nodes a snapshot was taken from.
///
/// Directives naming rows or cells that do not exist are skipped.
pub fn apply_directives(
    rows: &[NodeRef<'_>],
    directives: &[Directive],
    layout: &ColumnLayout,
) -> ApplyStats {
    let mut stats = ApplyStats::default();
    for directive in directives {
        let Some(row) = rows.get(directive.row.0) else {
            continue;
        };
        match &directive.action {
            Action::Remove { reason } => {
                tracing::trace!(row = directive.row.0, ?reason, "removing row");
                row.remove_from_parent();
                stats.removed += 1;
            }
            Action::Paint { cell, color } => {
                let cells = element_children(row);
                if let Some(target) = cells.get(cell.index(layout)) {
                    set_style_property(target, "background-color", color);
                    stats.painted += 1;
                }
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;
    use qis_grades::{normalize, CellRole, NormalizeRules, RemovalReason, RowId};

    const TABLE: &str = r#"
        <table>
          <tr class="qis_konto"><td colspan="11">Pflichtbereich</td></tr>
          <tr>
            <td>1001</td><td>Analysis  I</td><td>PL</td><td>WiSe 25/26</td><td>2,3</td>
            <td> bestanden </td><td>6</td><td>01.03.2026</td><td>1</td><td></td><td></td>
          </tr>
          <tr>
            <td>1002</td><td>Algebra</td><td>PL</td><td>WiSe 25/26</td><td></td>
            <td>angemeldet</td><td>5</td><td></td><td>1</td><td>RT</td><td></td>
          </tr>
        </table>
    "#;

    #[test]
    fn test_snapshot_reads_classes_and_normalized_cells() {
        let doc = Document::from(TABLE);
        let sel = doc.select("tr");
        let rows = snapshot_rows(sel.nodes());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].classes, vec!["qis_konto"]);
        assert_eq!(rows[0].cells.len(), 1);
        assert_eq!(rows[1].cells.len(), 11);
        assert_eq!(rows[1].cell(1), Some("Analysis I"));
        assert_eq!(rows[1].cell(5), Some("bestanden"));
        assert_eq!(rows[2].cell(9), Some("RT"));
    }

    #[test]
    fn test_directives_mutate_the_document() {
        let doc = Document::from(TABLE);
        let sel = doc.select("tr");
        let nodes = sel.nodes();
        let rows = snapshot_rows(nodes);
        let directives = normalize(&rows, &NormalizeRules::new(2026));
        assert_eq!(
            directives,
            vec![
                Directive::remove(RowId(0), RemovalReason::GroupingRow),
                Directive::paint(RowId(1), CellRole::Status, "#00ef00"),
                Directive::remove(RowId(2), RemovalReason::Withdrawn),
            ]
        );

        let stats = apply_directives(nodes, &directives, &ColumnLayout::default());
        assert_eq!(stats, ApplyStats { removed: 2, painted: 1 });

        assert_eq!(doc.select("tr").length(), 1);
        let html = doc.html().to_string();
        assert!(html.contains(r#"style="background-color: #00ef00;""#));
        assert!(!html.contains("Pflichtbereich"));
        assert!(!html.contains("Algebra"));
    }

    #[test]
    fn test_out_of_range_directives_are_skipped() {
        let doc = Document::from(TABLE);
        let sel = doc.select("tr");
        let directives = vec![
            Directive::remove(RowId(7), RemovalReason::Withdrawn),
            Directive::paint(RowId(0), CellRole::Annotation, "#00ef00"),
        ];
        let stats = apply_directives(sel.nodes(), &directives, &ColumnLayout::default());
        assert_eq!(stats, ApplyStats::default());
        assert_eq!(doc.select("tr").length(), 3);
    }
}
