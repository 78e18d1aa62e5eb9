//! Grouping of comment lines into documentation blocks.
//!
//! A block is a run of full-line comments on adjacent rows. A block that
//! ends on the row directly above a function definition documents that
//! function. A `#!` interpreter line on the first row never joins a block.

use std::collections::BTreeMap;

use shellfacts_core::CapturedNode;
use shellfacts_grammar::GrammarTransforms;

/// Documentation blocks keyed by their last row (zero-based).
#[derive(Debug, Default)]
pub(crate) struct DocBlocks {
    by_end_row: BTreeMap<u32, String>,
}

#[derive(Debug)]
struct OpenBlock {
    end_row: u32,
    lines: Vec<String>,
}

impl DocBlocks {
    /// Assembles blocks from comment nodes given in document order.
    pub(crate) fn assemble<'a>(
        comments: impl IntoIterator<Item = &'a CapturedNode>,
        source: &str,
        transforms: &dyn GrammarTransforms,
    ) -> Self {
        let mut blocks = Self::default();
        let mut open: Option<OpenBlock> = None;

        for comment in comments {
            if is_shebang(comment) || !is_full_line(comment, source) {
                continue;
            }
            let row = comment.span().start().line();
            let text = transforms.parse_doc_comment(comment.text());

            match open.as_mut() {
                Some(block) if block.end_row.checked_add(1) == Some(row) => {
                    block.end_row = row;
                    block.lines.push(text);
                }
                _ => {
                    if let Some(finished) = open.replace(OpenBlock {
                        end_row: row,
                        lines: vec![text],
                    }) {
                        blocks.close(&finished);
                    }
                }
            }
        }

        if let Some(finished) = open {
            blocks.close(&finished);
        }
        blocks
    }

    fn close(&mut self, block: &OpenBlock) {
        self.by_end_row.insert(block.end_row, block.lines.join("\n"));
    }

    /// Returns the block ending on the row above `row`.
    pub(crate) fn above(&self, row: u32) -> Option<&str> {
        let end_row = row.checked_sub(1)?;
        self.by_end_row.get(&end_row).map(String::as_str)
    }

    /// Returns the number of blocks.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.by_end_row.len()
    }
}

fn is_shebang(comment: &CapturedNode) -> bool {
    comment.span().start().line() == 0 && comment.text().starts_with("#!")
}

/// A comment is full-line when only blanks precede it on its row.
fn is_full_line(comment: &CapturedNode, source: &str) -> bool {
    let Ok(start) = usize::try_from(comment.span().start_byte()) else {
        return false;
    };
    let Some(prefix) = source.get(..start) else {
        return false;
    };
    let line_start = prefix.rfind('\n').map_or(0, |at| at.saturating_add(1));
    prefix
        .get(line_start..)
        .is_some_and(|lead| lead.chars().all(|c| c == ' ' || c == '\t'))
}
