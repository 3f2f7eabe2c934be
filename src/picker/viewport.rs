//! Cursor movement and the visible window over a ranked list

use super::rank::SortDirection;

/// Cursor over a ranked list of `len` items
///
/// The cursor never wraps. On an empty list it sits at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    /// Current index
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move up one item
    pub const fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Move down one item, stopping at the last one
    pub const fn move_down(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    /// Land on the best match after the list was recomputed
    pub const fn reset(&mut self, direction: SortDirection, len: usize) {
        self.index = match direction {
            SortDirection::Descending => 0,
            SortDirection::Ascending => len.saturating_sub(1),
        };
    }
}

/// Contiguous slice of `list` to display, and its start offset
///
/// When the list fits, the whole list is shown from 0. Otherwise a window of
/// exactly `capacity` items is centered on `cursor` and shifted back inside
/// the list bounds, so it always contains the cursor.
#[must_use]
pub fn visible_window<T>(list: &[T], cursor: usize, capacity: usize) -> (&[T], usize) {
    let range = window_range(list.len(), cursor, capacity);
    let start = range.start;
    (&list[range], start)
}

/// Index range form of [`visible_window`]
#[must_use]
pub fn window_range(len: usize, cursor: usize, capacity: usize) -> std::ops::Range<usize> {
    let capacity = capacity.max(1);
    if len <= capacity {
        return 0..len;
    }

    let mut start = cursor.saturating_sub(capacity / 2);
    let mut end = start + capacity;
    if end > len {
        end = len;
        start = end - capacity;
    }
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamps_without_wrapping() {
        let mut cursor = Cursor::default();
        cursor.move_up();
        assert_eq!(cursor.index(), 0);

        for _ in 0..10 {
            cursor.move_down(3);
        }
        assert_eq!(cursor.index(), 2);

        cursor.move_up();
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_cursor_on_empty_list() {
        let mut cursor = Cursor::default();
        cursor.move_down(0);
        cursor.move_up();
        assert_eq!(cursor.index(), 0);

        cursor.reset(SortDirection::Ascending, 0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_cursor_reset_by_direction() {
        let mut cursor = Cursor::default();
        for _ in 0..3 {
            cursor.move_down(10);
        }
        cursor.reset(SortDirection::Descending, 10);
        assert_eq!(cursor.index(), 0);
        cursor.reset(SortDirection::Ascending, 10);
        assert_eq!(cursor.index(), 9);
    }

    #[test]
    fn test_window_at_end() {
        let list = ["p1", "p2", "p3", "p4", "p5"];
        let (slice, start) = visible_window(&list, 4, 3);
        assert_eq!(slice, &["p3", "p4", "p5"]);
        assert_eq!(start, 2);
    }

    #[test]
    fn test_window_centered_and_at_start() {
        let list: Vec<usize> = (0..10).collect();

        let (slice, start) = visible_window(&list, 5, 4);
        assert_eq!(start, 3);
        assert_eq!(slice, &[3, 4, 5, 6]);

        let (slice, start) = visible_window(&list, 1, 4);
        assert_eq!(start, 0);
        assert_eq!(slice, &[0, 1, 2, 3]);
    }

    #[test]
    fn test_window_fits_whole_list() {
        let list = ["a", "b"];
        let (slice, start) = visible_window(&list, 1, 15);
        assert_eq!(slice, &["a", "b"]);
        assert_eq!(start, 0);
    }

    #[test]
    fn test_window_always_full_and_contains_cursor() {
        for len in 0..30 {
            for capacity in 1..12 {
                for cursor in 0..len.max(1) {
                    let range = window_range(len, cursor, capacity);
                    assert_eq!(range.len(), capacity.min(len));
                    if len > 0 {
                        assert!(
                            range.contains(&cursor),
                            "len={len} cap={capacity} cursor={cursor}"
                        );
                    }
                }
            }
        }
    }
}
