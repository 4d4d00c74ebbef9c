// src/lib.rs
//
// mdblocks — line-oriented markdown to block-level HTML.
//
// Pipeline: split (lines) -> classify (one token per line) -> render (fragments plus
// <ol>/<ul> containers inferred between adjacent tokens).
//
// Supported blocks: ATX headings 1-6, ordered items (`1.`), bullet items (`* `),
// blank lines (<br>), and paragraphs for everything else. One input line is one
// output line; no nesting and no inline markup.

pub mod classify;
pub mod io;
pub mod render;
pub mod split;

pub use classify::{classify, tokenize, BlockKind, HeadingLevel, Token};
pub use io::{read_source, write_output, IoError};
pub use render::{render, Container, Fragment};

/// Convert a whole document. Total and pure: same input, same output.
pub fn convert(src: &str) -> String {
    let tokens = tokenize(split::split_lines(src));
    let html = render(&tokens);
    log::debug!(
        "converted {} lines ({} bytes) into {} bytes of html",
        tokens.len(),
        src.len(),
        html.len()
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("# Title", "<h1>Title</h1>")]
    #[case("###### Deep", "<h6>Deep</h6>")]
    #[case("####### Too deep", "<p>####### Too deep</p>")]
    #[case("A\n\nB", "<p>A</p>\n<br>\n<p>B</p>")]
    #[case("* one\n* two", "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>")]
    #[case("* one\nB", "<ul>\n  <li>one</li>\n</ul>\n<p>B</p>")]
    #[case("1. first", "<ol>\n  <li>first</li>\n</ol>")]
    #[case("#", "<p>#</p>")]
    fn converts(#[case] src: &str, #[case] expected: &str) {
        assert_eq!(convert(src), expected);
    }

    #[test]
    fn conversion_is_repeatable() {
        let src = "# T\n1. a\n2. b\n\n* c\ntext";
        assert_eq!(convert(src), convert(src));
    }
}
