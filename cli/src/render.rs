use std::fmt::Write;

use gridsweep_core::{CellView, Snapshot};

fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Mine => '*',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count.min(9)),
    }
}

/// One text line per row, one character per cell.
pub fn board(snapshot: &Snapshot) -> String {
    let view = snapshot.view();
    let mut out = String::with_capacity(view.len() + view.nrows());
    for row in view.rows() {
        out.extend(row.iter().map(|&cell| glyph(cell)));
        out.push('\n');
    }
    let _ = write!(out, "{:?}, {} mines", snapshot.state, snapshot.mine_count);
    out
}
