/// A contiguous `/** ... */` comment extracted from a header file.
///
/// Holds the raw source lines in original order, boundary marker lines
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    pub lines: Vec<String>,
}

/// Scans header content and returns every `/** ... */` comment block, in
/// source order.
///
/// A block starts at a line whose trimmed content begins with `/**` and ends
/// at a later line whose trimmed content ends with `*/`; both boundary lines
/// are kept. An opening marker seen while a block is already open abandons
/// the open block without emitting it, and a block still open at end of input
/// is dropped. Malformed input never produces an error, only fewer blocks.
pub fn extract_comment_blocks(content: &str) -> Vec<CommentBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<Vec<String>> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("/**") {
            // An opening marker always restarts the accumulator, even
            // mid-block. The opening line itself is not checked for `*/`.
            current = Some(vec![line.to_string()]);
        } else if let Some(mut acc) = current.take() {
            acc.push(line.to_string());
            if trimmed.ends_with("*/") {
                blocks.push(CommentBlock { lines: acc });
            } else {
                current = Some(acc);
            }
        }
    }

    blocks
}
