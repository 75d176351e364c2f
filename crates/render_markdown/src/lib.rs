use extract_comment_blocks::CommentBlock;

const TITLE: &str = "# API documentation";
const COMMENTS_HEADING: &str = "## Extracted comments";

/// Strips comment markup from one block and returns the remaining text.
///
/// Each line is trimmed; a line that is exactly `/**` or `*/` is dropped,
/// and any other line loses its leading `*` decoration along with the
/// surrounding whitespace. Surviving lines are joined with a newline and the
/// result is trimmed once more.
pub fn convert_block(block: &CommentBlock) -> String {
    let mut kept = Vec::new();
    for line in &block.lines {
        let trimmed = line.trim();
        if trimmed == "/**" || trimmed == "*/" {
            continue;
        }
        kept.push(trimmed.trim_start_matches('*').trim());
    }
    kept.join("\n").trim().to_string()
}

/// Builds the final Markdown document from the introduction text and the
/// extracted comment blocks.
///
/// Sections are the fixed title, the trimmed introduction, the comments
/// heading, and one `- ` bullet per block whose converted text is non-empty.
/// Sections are joined by a blank line and the document ends with exactly one
/// trailing newline. An empty introduction still occupies a section, so it
/// shows up as a blank paragraph; that is accepted, not an error.
pub fn render(intro: &str, blocks: &[CommentBlock]) -> String {
    let mut sections = vec![
        TITLE.to_string(),
        intro.trim().to_string(),
        COMMENTS_HEADING.to_string(),
    ];

    for block in blocks {
        let converted = convert_block(block);
        if !converted.is_empty() {
            // The prefix applies to the whole converted text, not to each
            // inner line.
            sections.push(format!("- {}", converted));
        }
    }

    let mut document = sections.join("\n\n");
    document.push('\n');
    document
}
