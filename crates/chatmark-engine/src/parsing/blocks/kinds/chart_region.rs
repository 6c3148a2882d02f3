use std::io;

/// Lines holding a closing delimiter, indexed once per message.
///
/// For every line `i`, records the first line at or after `i` that contains
/// [`ChartRegion::CLOSE`], so an opener finds its closer without walking the
/// rest of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloserIndex(Vec<Option<usize>>);

impl CloserIndex {
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut next = None;
        let mut index = vec![None; lines.len()];
        for (i, line) in lines.iter().enumerate().rev() {
            if line.as_ref().contains(ChartRegion::CLOSE) {
                next = Some(i);
            }
            index[i] = next;
        }
        Self(index)
    }

    /// First closing line strictly after `at`.
    pub fn after(&self, at: usize) -> Option<usize> {
        self.0.get(at + 1).copied().flatten()
    }
}

/// A located `[CHART] ... [/CHART]` region.
///
/// The body is never copied out: [`RegionMatch::reader`] streams it straight
/// from the source lines.
#[derive(Debug, PartialEq, Eq)]
pub struct RegionMatch<'a, S> {
    lines: &'a [S],
    open_line: usize,
    /// Text after the opening delimiter on the opening line.
    head: &'a str,
    /// Index of the line holding the closing delimiter.
    pub close_line: usize,
    /// Byte offset of the closing delimiter in the close line's segment.
    close_at: usize,
    /// Whatever follows the closing delimiter on its line.
    pub tail: &'a str,
}

impl<'a, S: AsRef<str>> RegionMatch<'a, S> {
    /// The part of line `idx` that belongs to the body.
    fn segment(&self, idx: usize) -> &'a str {
        let line = if idx == self.open_line {
            self.head
        } else {
            self.lines[idx].as_ref()
        };
        if idx == self.close_line {
            &line[..self.close_at]
        } else {
            line
        }
    }

    /// Streams the text between the delimiters, line breaks kept.
    pub fn reader(&self) -> RegionReader<'_, 'a, S> {
        RegionReader {
            region: self,
            step: 0,
            pending: &[],
        }
    }
}

/// [`io::Read`] over a region body. Readers that stop early (a JSON
/// decoder hitting a syntax error) never touch the rest of the region.
pub struct RegionReader<'r, 'a, S> {
    region: &'r RegionMatch<'a, S>,
    /// Even steps are line segments, odd steps the line breaks between them.
    step: usize,
    pending: &'a [u8],
}

impl<'a, S: AsRef<str>> RegionReader<'_, 'a, S> {
    fn next_chunk(&mut self) -> Option<&'a [u8]> {
        let region = self.region;
        if self.step > 2 * (region.close_line - region.open_line) {
            return None;
        }
        let chunk: &'a [u8] = if self.step % 2 == 0 {
            region.segment(region.open_line + self.step / 2).as_bytes()
        } else {
            b"\n"
        };
        self.step += 1;
        Some(chunk)
    }
}

impl<S: AsRef<str>> io::Read for RegionReader<'_, '_, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.pending.is_empty() && !buf.is_empty() {
            match self.next_chunk() {
                Some(chunk) => self.pending = chunk,
                None => return Ok(0),
            }
        }
        let n = self.pending.len().min(buf.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending = &self.pending[n..];
        Ok(n)
    }
}

/// Chart region delimiters.
pub struct ChartRegion;

impl ChartRegion {
    pub const OPEN: &'static str = "[CHART]";
    pub const CLOSE: &'static str = "[/CHART]";

    /// Locates a region opening at line `at`.
    ///
    /// The line must begin (after leading whitespace) with the opening
    /// delimiter. The first closing delimiter found afterwards ends the
    /// region, so the match is non-greedy. Returns `None` when unterminated.
    pub fn locate<'a, S: AsRef<str>>(
        lines: &'a [S],
        closers: &CloserIndex,
        at: usize,
    ) -> Option<RegionMatch<'a, S>> {
        let head = lines.get(at)?.as_ref().trim_start().strip_prefix(Self::OPEN)?;

        let (close_line, segment) = match head.find(Self::CLOSE) {
            Some(_) => (at, head),
            None => {
                let close_line = closers.after(at)?;
                (close_line, lines.get(close_line)?.as_ref())
            }
        };
        let close_at = segment.find(Self::CLOSE)?;

        Some(RegionMatch {
            lines,
            open_line: at,
            head,
            close_line,
            close_at,
            tail: &segment[close_at + Self::CLOSE.len()..],
        })
    }
}
