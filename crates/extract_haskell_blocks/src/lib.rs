// crates/extract_haskell_blocks/src/lib.rs

/// Opening marker: a fence line tagged for extraction.
/// Matched as a line prefix, so info-string suffixes (e.g. attributes
/// after the language tag) still open a block.
pub const OPEN_MARKER: &str = "```haskell";

/// Closing marker: any fence line, regardless of tag. Only consulted
/// while inside a tracked block.
pub const CLOSE_MARKER: &str = "```";

/// Separator written in place of each closing fence line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Extracts the contents of ```haskell fenced code blocks from literate
/// source, concatenating them in input order.
///
/// The fence lines themselves are suppressed: an opening marker emits
/// nothing, and a closing marker emits a blank-line separator in its
/// place. Lines inside a block are passed through verbatim, including
/// their original terminators. Lines outside any tracked block are
/// dropped, as are fences tagged with any other language.
///
/// The filter is total: an unterminated block simply passes its
/// trailing lines through with no final separator, and a stray closing
/// fence outside a block is ignored.
pub fn extract_haskell_blocks(content: &str) -> String {
    let mut output = String::new();
    let mut in_code = false;

    for line in content.split_inclusive('\n') {
        if !in_code && line.starts_with(OPEN_MARKER) {
            in_code = true;
            continue;
        }
        if in_code && line.starts_with(CLOSE_MARKER) {
            in_code = false;
            output.push_str(BLOCK_SEPARATOR);
            continue;
        }
        if in_code {
            output.push_str(line);
        }
    }
    output
}
