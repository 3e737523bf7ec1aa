//! Source location tracking

use serde::Serialize;

/// A byte range in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span sitting at `offset`
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_covers_both() {
        let a = Span::new(4, 6);
        let b = Span::new(1, 3);
        assert_eq!(a.merge(b), Span::new(1, 6));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(2, 9).to_string(), "2..9");
    }

    #[test]
    fn test_range_conversions() {
        let range: std::ops::Range<usize> = Span::new(3, 5).into();
        assert_eq!(range, 3..5);
        assert_eq!(Span::from(0..1), Span::new(0, 1));
        assert_eq!(Span::point(7), Span::new(7, 7));
    }
}
