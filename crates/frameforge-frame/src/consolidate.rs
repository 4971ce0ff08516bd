//! Style and script block consolidation.
//!
//! A built frame is the concatenation of many fragments, and each fragment may
//! carry its own `<style>` or `<script>` block. Consolidation folds them into a
//! single leading `<style>` block and a single trailing `<script>` block.

const STYLE_OPEN: &str = "<style>";
const STYLE_CLOSE: &str = "</style>";
const SCRIPT_OPEN: &str = "<script>";
const SCRIPT_CLOSE: &str = "</script>";

/// Where the merged block goes.
#[derive(Clone, Copy)]
enum Placement {
    Prepend,
    Append,
}

/// A matched `<tag>body</tag>` span, as byte offsets into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    start: usize,
    body_start: usize,
    body_end: usize,
    end: usize,
}

/// Merge repeated `<style>` and `<script>` blocks.
///
/// Styles are merged first into one block at the front of the document, then
/// scripts into one block at the end. A tag kind that occurs zero or one time
/// is left exactly where it is. Tags are matched literally (no attributes) and
/// an opener without a closer ends the scan, leaving the rest untouched.
pub fn consolidate(html: &str) -> String {
    let styled = merge_blocks(html, STYLE_OPEN, STYLE_CLOSE, Placement::Prepend);
    merge_blocks(&styled, SCRIPT_OPEN, SCRIPT_CLOSE, Placement::Append)
}

fn merge_blocks(html: &str, open: &str, close: &str, placement: Placement) -> String {
    let blocks = scan_blocks(html, open, close);
    if blocks.len() < 2 {
        return html.to_string();
    }

    let mut merged = String::new();
    let mut rest = String::with_capacity(html.len());
    let mut cursor = 0;
    for block in &blocks {
        merged.push_str(&html[block.body_start..block.body_end]);
        merged.push('\n');
        rest.push_str(&html[cursor..block.start]);
        cursor = block.end;
    }
    rest.push_str(&html[cursor..]);

    let mut out = String::with_capacity(rest.len() + merged.len() + open.len() + close.len());
    match placement {
        Placement::Prepend => {
            out.push_str(open);
            out.push_str(&merged);
            out.push_str(close);
            out.push_str(&rest);
        }
        Placement::Append => {
            out.push_str(&rest);
            out.push_str(open);
            out.push_str(&merged);
            out.push_str(close);
        }
    }
    out
}

/// Find every non-overlapping `open … close` span, shortest match first.
fn scan_blocks(html: &str, open: &str, close: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(found) = html[pos..].find(open) {
        let start = pos + found;
        let body_start = start + open.len();
        let Some(close_at) = html[body_start..].find(close) else {
            break;
        };
        let body_end = body_start + close_at;
        let end = body_end + close.len();
        blocks.push(Block {
            start,
            body_start,
            body_end,
            end,
        });
        pos = end;
    }

    blocks
}
