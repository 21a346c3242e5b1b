//! Highlight spans for the note pane
//!
//! Spans are stored per line as byte ranges, matching how the editor
//! reports cursor columns and how line highlighters consume ranges.
//! Edits move spans along with the text they cover.

use std::ops::Range;

/// A highlighted byte range within one line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightSpan {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// One contiguous replacement between two versions of the buffer.
///
/// Bytes `start..old_end` of the old text became `start..new_end` of the
/// new text; everything else is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextChange {
    pub start: usize,
    pub old_end: usize,
    pub new_end: usize,
}

impl TextChange {
    /// New position of a span start. Text inserted at the start stays outside.
    fn map_start(&self, pos: usize) -> usize {
        if pos < self.start {
            pos
        } else if pos >= self.old_end {
            pos - self.old_end + self.new_end
        } else {
            self.new_end
        }
    }

    /// New position of a span end. Text inserted at the end stays outside.
    fn map_end(&self, pos: usize) -> usize {
        if pos <= self.start {
            pos
        } else if pos >= self.old_end {
            pos - self.old_end + self.new_end
        } else {
            self.start
        }
    }
}

/// Reduce an edit to the replaced byte range.
///
/// `cursor` is the caret offset in `new` after the edit. Text after the
/// caret is never part of the change, which places insertions and deletions
/// correctly inside runs of repeated characters.
pub fn text_change(old: &str, new: &str, cursor: Option<usize>) -> Option<TextChange> {
    if old == new {
        return None;
    }
    let (o, n) = (old.as_bytes(), new.as_bytes());

    let max_suffix = cursor
        .filter(|&c| c <= new.len())
        .map_or(new.len(), |c| new.len() - c)
        .min(old.len());
    let mut suffix = o
        .iter()
        .rev()
        .zip(n.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();
    while !old.is_char_boundary(old.len() - suffix) {
        suffix -= 1;
    }

    let max_prefix = old.len().min(new.len()) - suffix;
    let mut prefix = o
        .iter()
        .zip(n)
        .take(max_prefix)
        .take_while(|(a, b)| a == b)
        .count();
    while !old.is_char_boundary(prefix) {
        prefix -= 1;
    }

    Some(TextChange {
        start: prefix,
        old_end: old.len() - suffix,
        new_end: new.len() - suffix,
    })
}

/// Byte offset at which each line starts
fn line_starts(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

/// Absolute byte offset of a `(line, byte column)` position within `text`
pub fn offset_of(text: &str, (line, col): (usize, usize)) -> Option<usize> {
    let starts = line_starts(text);
    let start = *starts.get(line)?;
    let end = starts.get(line + 1).map_or(text.len(), |next| next - 1);
    let offset = start + col;
    (offset <= end && text.is_char_boundary(offset)).then_some(offset)
}

/// Split an absolute byte range into per-line spans, leaving out line breaks
fn spans_for_range(text: &str, range: Range<usize>) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    let mut line_start = 0;
    for (index, line) in text.split('\n').enumerate() {
        if line_start > range.end {
            break;
        }
        let line_end = line_start + line.len();
        let from = range.start.max(line_start);
        let to = range.end.min(line_end);
        if from < to {
            spans.push(HighlightSpan {
                line: index,
                start: from - line_start,
                end: to - line_start,
            });
        }
        line_start = line_end + 1;
    }
    spans
}

/// All highlight spans in the note buffer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    spans: Vec<HighlightSpan>,
}

impl Highlights {
    pub fn extend(&mut self, spans: impl IntoIterator<Item = HighlightSpan>) {
        self.spans.extend(spans);
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Byte ranges highlighted on `line`
    pub fn on_line(&self, line: usize) -> impl Iterator<Item = Range<usize>> + '_ {
        self.spans
            .iter()
            .filter(move |s| s.line == line)
            .map(HighlightSpan::range)
    }

    /// Move spans from `old` to their place in `new`.
    ///
    /// Spans shift with text inserted or removed before them, grow with text
    /// typed inside them, split when a line break is entered inside them,
    /// and disappear when all their text is deleted.
    pub fn follow_edit(&mut self, old: &str, new: &str, cursor: Option<usize>) {
        let Some(change) = text_change(old, new, cursor) else {
            return;
        };
        let starts = line_starts(old);
        let mut moved = Vec::with_capacity(self.spans.len());
        for span in &self.spans {
            let Some(&line_start) = starts.get(span.line) else {
                continue;
            };
            let start = change.map_start(line_start + span.start);
            let end = change.map_end(line_start + span.end);
            if start < end {
                moved.extend(spans_for_range(new, start..end));
            }
        }
        self.spans = moved;
        self.retain_valid(new);
    }

    /// Drop or truncate spans that do not fit `text`
    fn retain_valid(&mut self, text: &str) {
        let lines: Vec<&str> = text.split('\n').collect();
        self.spans.retain_mut(|span| {
            let Some(line) = lines.get(span.line) else {
                return false;
            };
            span.end = span.end.min(line.len());
            span.start < span.end
                && line.is_char_boundary(span.start)
                && line.is_char_boundary(span.end)
        });
    }
}

/// Place the selected text in the buffer and split it into per-line spans.
///
/// With a known selection anchor the range runs from the anchor to the
/// cursor. Without one, the selection must sit on exactly one side of the
/// cursor; when the same text appears on both sides the range cannot be
/// told apart and nothing is returned.
pub fn selection_span(
    text: &str,
    cursor: (usize, usize),
    anchor: Option<(usize, usize)>,
    selected: &str,
) -> Option<Vec<HighlightSpan>> {
    if selected.is_empty() {
        return None;
    }
    let offset = offset_of(text, cursor)?;

    if let Some(anchor) = anchor.and_then(|a| offset_of(text, a)) {
        let range = offset.min(anchor)..offset.max(anchor);
        if text.get(range.clone()) == Some(selected) {
            let spans = spans_for_range(text, range);
            return (!spans.is_empty()).then_some(spans);
        }
        log::debug!("Selection anchor out of date, matching text instead");
    }

    let len = selected.len();
    let before = offset
        .checked_sub(len)
        .filter(|&start| text.get(start..offset) == Some(selected));
    let after = Some(offset).filter(|&start| text.get(start..start + len) == Some(selected));
    let start = match (before, after) {
        (Some(start), None) | (None, Some(start)) => start,
        _ => return None,
    };

    let spans = spans_for_range(text, start..start + len);
    (!spans.is_empty()).then_some(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(line: usize, start: usize, end: usize) -> HighlightSpan {
        HighlightSpan { line, start, end }
    }

    fn highlights(spans: Vec<HighlightSpan>) -> Highlights {
        Highlights { spans }
    }

    #[test]
    fn test_forward_drag_selection() {
        // "hello world", selected "world" with the cursor after it
        let spans = selection_span("hello world", (0, 11), Some((0, 6)), "world").unwrap();
        assert_eq!(spans, vec![span(0, 6, 11)]);
    }

    #[test]
    fn test_backward_drag_selection() {
        // Cursor at the start of the selection
        let spans = selection_span("hello world", (0, 0), Some((0, 5)), "hello").unwrap();
        assert_eq!(spans, vec![span(0, 0, 5)]);
    }

    #[test]
    fn test_repeated_text_uses_anchor() {
        // Right-to-left drag over the second "ab"
        let spans = selection_span("abab", (0, 2), Some((0, 4)), "ab").unwrap();
        assert_eq!(spans, vec![span(0, 2, 4)]);

        // Left-to-right drag over the first one
        let spans = selection_span("abab", (0, 2), Some((0, 0)), "ab").unwrap();
        assert_eq!(spans, vec![span(0, 0, 2)]);
    }

    #[test]
    fn test_repeated_text_without_anchor_is_rejected() {
        assert!(selection_span("abab", (0, 2), None, "ab").is_none());
    }

    #[test]
    fn test_unambiguous_selection_without_anchor() {
        let spans = selection_span("hello world", (0, 11), None, "world").unwrap();
        assert_eq!(spans, vec![span(0, 6, 11)]);
        let spans = selection_span("hello world", (0, 0), None, "hello").unwrap();
        assert_eq!(spans, vec![span(0, 0, 5)]);
    }

    #[test]
    fn test_stale_anchor_falls_back_to_text() {
        let spans = selection_span("hello world", (0, 11), Some((0, 2)), "world").unwrap();
        assert_eq!(spans, vec![span(0, 6, 11)]);
    }

    #[test]
    fn test_multi_line_selection() {
        let text = "first line\nsecond\nthird";
        let spans = selection_span(text, (2, 3), Some((0, 6)), "line\nsecond\nthi").unwrap();
        assert_eq!(spans, vec![span(0, 6, 10), span(1, 0, 6), span(2, 0, 3)]);
    }

    #[test]
    fn test_non_ascii_selection() {
        let text = "café ☕ time";
        let cursor = (0, "café ☕".len());
        let spans = selection_span(text, cursor, None, "☕").unwrap();
        assert_eq!(spans, vec![span(0, "café ".len(), "café ☕".len())]);
    }

    #[test]
    fn test_no_selection() {
        assert!(selection_span("hello", (0, 2), None, "").is_none());
        assert!(selection_span("hello", (0, 2), None, "xyz").is_none());
        assert!(selection_span("hello", (3, 0), None, "h").is_none());
        assert!(selection_span("hello", (0, 9), None, "h").is_none());
        // A bare line break covers no characters
        assert!(selection_span("a\nb", (1, 0), Some((0, 1)), "\n").is_none());
    }

    #[test]
    fn test_on_line_and_clear() {
        let mut h = Highlights::default();
        h.extend([span(0, 0, 2), span(1, 3, 4), span(0, 5, 6)]);
        assert_eq!(h.on_line(0).collect::<Vec<_>>(), vec![0..2, 5..6]);
        assert_eq!(h.on_line(1).collect::<Vec<_>>(), vec![3..4]);
        assert_eq!(h.on_line(2).count(), 0);
        h.clear();
        assert!(h.is_empty());
    }

    #[test]
    fn test_text_change_uses_cursor() {
        // Typing a third "l" after "hel"
        assert_eq!(
            text_change("hello", "helllo", Some(4)),
            Some(TextChange {
                start: 3,
                old_end: 3,
                new_end: 4
            })
        );
        // Without the caret the same edit is reported further left
        assert_eq!(
            text_change("hello", "helllo", None),
            Some(TextChange {
                start: 2,
                old_end: 2,
                new_end: 3
            })
        );
        assert_eq!(text_change("same", "same", Some(0)), None);
    }

    #[test]
    fn test_text_change_keeps_char_boundaries() {
        assert_eq!(
            text_change("café", "cafè", Some("cafè".len())),
            Some(TextChange {
                start: 3,
                old_end: 5,
                new_end: 5
            })
        );
    }

    #[test]
    fn test_insert_before_span_shifts_it() {
        let mut h = highlights(vec![span(0, 6, 11)]);
        h.follow_edit("hello world", "Xhello world", Some(1));
        assert_eq!(h.spans, vec![span(0, 7, 12)]);
    }

    #[test]
    fn test_insert_inside_span_grows_it() {
        let mut h = highlights(vec![span(0, 6, 11)]);
        h.follow_edit("hello world", "hello woXrld", Some(9));
        assert_eq!(h.spans, vec![span(0, 6, 12)]);
    }

    #[test]
    fn test_insert_at_span_end_stays_outside() {
        let mut h = highlights(vec![span(0, 0, 5)]);
        h.follow_edit("hello world", "hello! world", Some(6));
        assert_eq!(h.spans, vec![span(0, 0, 5)]);
    }

    #[test]
    fn test_line_inserted_above_moves_span_down() {
        let mut h = highlights(vec![span(0, 6, 11)]);
        h.follow_edit("hello world", "\nhello world", Some(1));
        assert_eq!(h.spans, vec![span(1, 6, 11)]);
    }

    #[test]
    fn test_line_break_inside_span_splits_it() {
        let mut h = highlights(vec![span(0, 6, 11)]);
        h.follow_edit("hello world", "hello wor\nld", Some(10));
        assert_eq!(h.spans, vec![span(0, 6, 9), span(1, 0, 2)]);
    }

    #[test]
    fn test_backspace_inside_span_shrinks_it() {
        let mut h = highlights(vec![span(0, 6, 11)]);
        h.follow_edit("hello world", "hello orld", Some(6));
        assert_eq!(h.spans, vec![span(0, 6, 10)]);
    }

    #[test]
    fn test_deleting_span_text_removes_it() {
        let mut h = highlights(vec![span(0, 3, 5), span(0, 0, 2)]);
        h.follow_edit("ab cd", "ab ", Some(3));
        assert_eq!(h.spans, vec![span(0, 0, 2)]);
    }

    #[test]
    fn test_joining_lines_moves_span_up() {
        let mut h = highlights(vec![span(1, 0, 5)]);
        h.follow_edit("top\nworld", "topworld", Some(3));
        assert_eq!(h.spans, vec![span(0, 3, 8)]);
    }
}
