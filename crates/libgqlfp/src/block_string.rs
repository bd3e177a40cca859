//! Block string normalization.
//!
//! A block string's fingerprint payload is its interior normalized the way
//! clients are expected to interpret it: trailing all-whitespace lines are
//! trimmed entirely, the common indentation prefix is stripped from every
//! line but the first, and an all-whitespace first line is dropped. The
//! normalized content is produced as a sequence of borrowed line slices so
//! the walker can stream it straight into the digest without assembling an
//! owned copy.

use crate::byte_classes::is_whitespace;

/// Iterates the normalized lines of a block string's interior.
///
/// Each yielded slice is one line, including its trailing newline byte
/// when the line has one. `prefix_len` is the common indentation computed
/// by the scanner; the first line is never stripped, continuation lines
/// are cut at `prefix_len` bytes and skipped entirely when shorter.
pub(crate) struct BlockStringLines<'src> {
    content: &'src [u8],
    pos: usize,
    prefix_len: usize,
    first_line_done: bool,
}

impl<'src> BlockStringLines<'src> {
    pub(crate) fn new(content: &'src [u8], prefix_len: usize) -> Self {
        Self {
            content,
            pos: 0,
            prefix_len,
            first_line_done: false,
        }
    }
}

impl<'src> Iterator for BlockStringLines<'src> {
    type Item = &'src [u8];

    fn next(&mut self) -> Option<&'src [u8]> {
        let s = self.content;

        if !self.first_line_done {
            self.first_line_done = true;
            let mut i = 0;
            let mut blank = true;
            while i < s.len() && s[i] != b'\n' {
                if !is_whitespace(s[i]) {
                    blank = false;
                }
                i += 1;
            }
            let line_end = if i < s.len() { i + 1 } else { i };
            self.pos = line_end;
            if !blank {
                return Some(&s[..line_end]);
            }
        }

        loop {
            if self.pos >= s.len() {
                return None;
            }
            let start = self.pos;
            let mut i = start;
            while i < s.len() && s[i] != b'\n' {
                i += 1;
            }
            let line_end = if i < s.len() { i + 1 } else { i };
            self.pos = line_end;
            // A line shorter than the common prefix vanishes.
            if i - start >= self.prefix_len {
                return Some(&s[start + self.prefix_len..line_end]);
            }
        }
    }
}

/// Drops trailing lines that contain nothing but whitespace, along with
/// their line breaks.
pub(crate) fn trim_blank_suffix_lines(s: &[u8]) -> &[u8] {
    let mut end = s.len();
    loop {
        let line_start = match s[..end].iter().rposition(|&b| b == b'\n') {
            Some(newline) => newline + 1,
            None => 0,
        };
        if s[line_start..end].iter().any(|&b| !is_whitespace(b)) {
            return &s[..end];
        }
        if line_start == 0 {
            return &s[..0];
        }
        end = line_start - 1;
    }
}
