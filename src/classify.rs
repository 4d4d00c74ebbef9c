// src/classify.rs
//
// Line classifier.
//
// - Every line maps to exactly one BlockKind. Paragraph is the default kind and is
//   never listed in the rule table, so classification cannot fail.
// - RULES is tried top to bottom; the first kind whose predicate holds wins.
// - Heading and bullet predicates look at the trimmed line. The ordered-item
//   predicate looks at the raw line (marker must start at column 0).
// - Text goes into the output verbatim; no escaping, no inline markup.

/* ============================== Block kinds ============================== */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    H1 = 1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Number of '#' characters in the marker.
    #[inline]
    pub fn depth(self) -> usize {
        self as usize
    }

    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Heading(HeadingLevel),
    OrderedItem,
    UnorderedItem,
    Blank,
    /// Catch-all for any line no rule claims.
    Paragraph,
}

/// Priority order for classification. `Paragraph` is the fallback and is not listed.
pub static RULES: [BlockKind; 9] = [
    BlockKind::Heading(HeadingLevel::H1),
    BlockKind::Heading(HeadingLevel::H2),
    BlockKind::Heading(HeadingLevel::H3),
    BlockKind::Heading(HeadingLevel::H4),
    BlockKind::Heading(HeadingLevel::H5),
    BlockKind::Heading(HeadingLevel::H6),
    BlockKind::OrderedItem,
    BlockKind::UnorderedItem,
    BlockKind::Blank,
];

impl BlockKind {
    /// Does `line` belong to this kind?
    pub fn matches(self, line: &str) -> bool {
        match self {
            BlockKind::Heading(level) => is_heading(line, level.depth()),
            BlockKind::OrderedItem => ordered_marker_len(line).is_some(),
            BlockKind::UnorderedItem => is_bullet(line),
            BlockKind::Blank => line.is_empty(),
            BlockKind::Paragraph => true,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Heading(level) => level.tag(),
            BlockKind::OrderedItem | BlockKind::UnorderedItem => "li",
            BlockKind::Blank => "br",
            BlockKind::Paragraph => "p",
        }
    }

    /// Render `line` as this kind's HTML fragment.
    ///
    /// A line without this kind's marker is rendered whole inside the kind's tag.
    pub fn render(self, line: &str) -> String {
        let tag = self.tag();
        match self {
            BlockKind::Heading(level) => {
                let text = strip_heading_marker(line, level.depth()).unwrap_or(line);
                wrap_tag(tag, text)
            }
            BlockKind::OrderedItem => {
                let marker = ordered_marker_len(line).unwrap_or(0);
                let rest = &line[marker..];
                let rest = rest.strip_prefix(' ').unwrap_or(rest);
                list_item(tag, rest)
            }
            BlockKind::UnorderedItem => {
                let text = line.trim_start().strip_prefix(BULLET).unwrap_or(line);
                list_item(tag, text)
            }
            BlockKind::Blank => single_tag(tag, false),
            BlockKind::Paragraph => wrap_tag(tag, line),
        }
    }
}

/* ============================ Marker predicates ========================== */

const BULLET: &str = "* ";

// ^#{depth} (exactly)
#[inline]
fn starts_with_heading_marker(s: &str, depth: usize) -> bool {
    let b = s.as_bytes();
    b.len() > depth && b[..depth].iter().all(|&c| c == b'#') && b[depth] == b' '
}

fn is_heading(line: &str, depth: usize) -> bool {
    starts_with_heading_marker(line.trim(), depth)
}

/// Text after the marker on the left-trimmed line.
fn strip_heading_marker(line: &str, depth: usize) -> Option<&str> {
    let rest = line.trim_start();
    // safe: the marker is ASCII
    starts_with_heading_marker(rest, depth).then(|| &rest[depth + 1..])
}

fn is_bullet(line: &str) -> bool {
    line.trim().starts_with(BULLET)
}

/// Length of a leading `\d*\.` marker, if the raw line starts with one.
fn ordered_marker_len(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        Some(i + 1)
    } else {
        None
    }
}

/* ================================ Tags =================================== */

pub(crate) fn wrap_tag(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}

pub(crate) fn single_tag(tag: &str, closing: bool) -> String {
    if closing {
        format!("</{tag}>")
    } else {
        format!("<{tag}>")
    }
}

// Indentation is cosmetic only.
fn list_item(tag: &str, content: &str) -> String {
    format!("  {}", wrap_tag(tag, content))
}

/* ================================ Tokens ================================= */

/// A classified line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: BlockKind,
}

impl<'a> Token<'a> {
    pub fn render(&self) -> String {
        self.kind.render(self.text)
    }
}

pub fn classify(line: &str) -> Token<'_> {
    let kind = RULES
        .iter()
        .copied()
        .find(|kind| kind.matches(line))
        .unwrap_or(BlockKind::Paragraph);
    log::trace!("classified {line:?} as {kind:?}");
    Token { text: line, kind }
}

pub fn tokenize<'a, I>(lines: I) -> Vec<Token<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().map(classify).collect()
}
