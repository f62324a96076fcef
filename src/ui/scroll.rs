/// Adjusts `row_offset` so that `row` falls inside a window of `visible_rows`,
/// moving it as little as possible.
pub fn ensure_row_visible(row_offset: &mut usize, row: usize, visible_rows: usize) {
    if row < *row_offset {
        *row_offset = row;
    }
    if row >= *row_offset + visible_rows {
        *row_offset = (row + 1).saturating_sub(visible_rows);
    }
}
