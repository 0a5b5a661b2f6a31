/// The smallest window that can hold a pseudoknot core: two crossing pairs
/// with one base of loop separation on each side.
pub const MIN_WINDOW_SPAN: usize = 6;

/// A half-open slice `[start, end)` of the sequence handed to the grammar
/// engine. `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowBoundary {
    pub start: usize,
    pub end: usize,
}

impl WindowBoundary {
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

/// Enumerates every window of span `MIN_WINDOW_SPAN..=max_loop_size` over a
/// sequence of `sequence_len` bases, ordered by `(start, end)` ascending.
///
/// The order is part of the pipeline contract: the candidate list is
/// flattened in this order before ranking, so it must be stable across runs.
pub fn enumerate_windows(sequence_len: usize, max_loop_size: usize) -> Vec<WindowBoundary> {
    let max_span = max_loop_size.min(sequence_len);
    let mut windows = Vec::new();
    if max_span < MIN_WINDOW_SPAN {
        return windows;
    }
    for start in 0..=(sequence_len - MIN_WINDOW_SPAN) {
        let last_end = (start + max_span).min(sequence_len);
        for end in (start + MIN_WINDOW_SPAN)..=last_end {
            windows.push(WindowBoundary { start, end });
        }
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sequences_yield_no_windows() {
        assert!(enumerate_windows(0, 100).is_empty());
        assert!(enumerate_windows(MIN_WINDOW_SPAN - 1, 100).is_empty());
    }

    #[test]
    fn minimal_sequence_yields_a_single_window() {
        let windows = enumerate_windows(MIN_WINDOW_SPAN, 100);
        assert_eq!(windows, vec![WindowBoundary { start: 0, end: 6 }]);
    }

    #[test]
    fn spans_respect_both_bounds() {
        let windows = enumerate_windows(20, 8);
        assert!(!windows.is_empty());
        assert!(windows
            .iter()
            .all(|w| w.span() >= MIN_WINDOW_SPAN && w.span() <= 8 && w.end <= 20));
    }

    #[test]
    fn windows_are_ordered_by_start_then_end() {
        let windows = enumerate_windows(15, 10);
        let mut sorted = windows.clone();
        sorted.sort_by_key(|w| (w.start, w.end));
        assert_eq!(windows, sorted);
    }

    #[test]
    fn window_count_matches_closed_form() {
        // Spans 6..=8 over 10 bases: 5 + 4 + 3 starts.
        assert_eq!(enumerate_windows(10, 8).len(), 12);
    }
}
