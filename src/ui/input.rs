/// Keypad key (1-9) to cell index: key 7 is cell 0, key 3 is cell 8.
const KEYPAD: [usize; 9] = [6, 7, 8, 3, 4, 5, 0, 1, 2];

/// Map a keypad key to its cell index.
pub fn keypad_to_cell(key: usize) -> Option<usize> {
    if (1..=9).contains(&key) {
        Some(KEYPAD[key - 1])
    } else {
        None
    }
}

/// Parse one line of human input into a cell index. Anything that is not a
/// key in 1-9 yields None, and the caller reprompts.
pub fn parse_move(line: &str) -> Option<usize> {
    line.trim().parse::<usize>().ok().and_then(keypad_to_cell)
}
