/// Splits a document into blocks on blank-line boundaries.
///
/// A block is a maximal run of non-blank lines rejoined with `\n`. Blank
/// lines (including whitespace-only ones) never produce a block, so blank
/// input yields an empty vector. Whitespace inside a block is left alone.
pub fn segment(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}
