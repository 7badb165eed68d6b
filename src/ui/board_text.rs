use crate::game::Board;

/// Banner shown once at session start: which key puts a mark where.
pub const KEYPAD_HELP: &str = "\
Pick cells with the numeric keypad:
+-----------+
| 7 | 8 | 9 |
| 4 | 5 | 6 |
| 1 | 2 | 3 |
+-----------+
";

/// Render the board as a fixed ASCII box, one glyph per cell, rows in index
/// order (cells 0-2 on the first line).
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("+-----------+\n");
    for row in 0..3 {
        let line = format!(
            "| {} | {} | {} |\n",
            board.get(3 * row).glyph(),
            board.get(3 * row + 1).glyph(),
            board.get(3 * row + 2).glyph(),
        );
        out.push_str(&line);
    }
    out.push_str("+-----------+\n");
    out
}
