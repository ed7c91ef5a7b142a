//! Per-column alignment resolution.

use crate::model::{Alignment, DomTree, NodeId};

/// Resolve a column's alignment by majority vote across all rows.
///
/// Rows are scanned in document order; each cell at `column` contributes its
/// alignment hint as a vote (unrecognized hints contribute nothing). The
/// running winner is only replaced on a strictly higher count, so ties go to
/// the alignment that reached the count first. No votes at all resolve to
/// [`Alignment::None`], rendered as a plain dash border.
pub fn resolve_column_alignment(tree: &DomTree, table: NodeId, column: usize) -> Alignment {
    let mut votes = [0usize; 3];
    let mut winner = Alignment::None;

    for row in tree.table_rows(table) {
        let cells = tree.row_cells(row);
        let Some(&cell) = cells.get(column) else {
            continue;
        };
        let alignment = tree.node(cell).alignment();
        let Some(slot) = vote_slot(alignment) else {
            continue;
        };
        votes[slot] += 1;

        let current = vote_slot(winner).map(|s| votes[s]).unwrap_or(0);
        if votes[slot] > current {
            winner = alignment;
        }
    }

    winner
}

fn vote_slot(alignment: Alignment) -> Option<usize> {
    match alignment {
        Alignment::Left => Some(0),
        Alignment::Right => Some(1),
        Alignment::Center => Some(2),
        Alignment::None => None,
    }
}
