// src/split.rs
//
// Line splitter.
//
// - Splits on '\n' only. '\r' is left in place as ordinary line content.
// - Blank lines survive as "" entries; they are block boundaries.
// - A single trailing '\n' terminates the last line instead of opening a new one.
// - No trimming happens here; rules trim as they need to.

use memchr::memchr_iter;

/// Lazy iterator over the lines of a document.
pub struct Lines<'a> {
    src: &'a str,
    breaks: memchr::Memchr<'a>,
    start: usize,
    done: bool,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        match self.breaks.next() {
            Some(nl) => {
                let line = &self.src[self.start..nl]; // safe: '\n' is an ASCII boundary
                self.start = nl + 1;
                Some(line)
            }
            None => {
                self.done = true;
                if self.start < self.src.len() {
                    Some(&self.src[self.start..])
                } else {
                    None
                }
            }
        }
    }
}

/// Split `src` into lines.
///
/// `""` yields nothing, `"A\n"` yields `["A"]`, `"A\n\nB"` yields `["A", "", "B"]`.
pub fn split_lines(src: &str) -> Lines<'_> {
    Lines {
        src,
        breaks: memchr_iter(b'\n', src.as_bytes()),
        start: 0,
        done: false,
    }
}

/// Rewrite every "\r\n" pair to "\n". Lone '\r' bytes are kept.
pub fn normalize_crlf(src: &str) -> String {
    if memchr::memchr(b'\r', src.as_bytes()).is_none() {
        return src.to_string();
    }
    src.replace("\r\n", "\n")
}
