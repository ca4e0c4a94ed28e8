//! Plain-text rendering of the configured grid.

/// Builds the character grid for one frame.
///
/// Pure: the output depends only on the arguments, so identical calls yield
/// identical frames. Positions outside the grid — including the `(-1, -1)`
/// placeholder — are skipped. The taxi is drawn last and wins contested
/// cells.
#[must_use]
pub fn render_grid(
    grid_size: usize,
    taxi: (i64, i64),
    passenger: (i64, i64),
    destination: (i64, i64),
) -> String {
    let mut grid = vec![vec!['.'; grid_size]; grid_size];

    if let Some((row, col)) = cell(grid_size, passenger) {
        grid[row][col] = 'P';
    }
    if let Some((row, col)) = cell(grid_size, destination) {
        grid[row][col] = 'D';
    }
    if let Some((row, col)) = cell(grid_size, taxi) {
        grid[row][col] = 'T';
    }

    let mut out = String::new();
    for row in &grid {
        for (i, glyph) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*glyph);
        }
        out.push('\n');
    }
    out
}

/// Clears the terminal and homes the cursor.
pub fn clear_terminal() {
    print!("\x1b[2J\x1b[H");
}

fn cell(grid_size: usize, pos: (i64, i64)) -> Option<(usize, usize)> {
    let row = usize::try_from(pos.0).ok()?;
    let col = usize::try_from(pos.1).ok()?;
    (row < grid_size && col < grid_size).then_some((row, col))
}
