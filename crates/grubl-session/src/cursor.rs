/// Index of the venue on screen.
///
/// For a non-empty list `0 <= index < len`. The index only moves forward and
/// stops at the last item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseCursor {
    index: usize,
    len: usize,
}

impl BrowseCursor {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// `true` when there is no further item to advance to.
    #[must_use]
    pub fn is_last(self) -> bool {
        self.index + 1 >= self.len
    }

    /// Moves to the next item. Returns `false`, leaving the cursor where it
    /// is, at the last item or on an empty list.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_one_step_until_the_end() {
        let mut cursor = BrowseCursor::new(3);
        for k in 0..2 {
            assert_eq!(cursor.index(), k);
            assert!(cursor.advance());
            assert_eq!(cursor.index(), k + 1);
        }
        assert!(cursor.is_last());
    }

    #[test]
    fn advance_is_idempotent_at_the_last_item() {
        let mut cursor = BrowseCursor::new(2);
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn empty_cursor_never_moves() {
        let mut cursor = BrowseCursor::new(0);
        assert!(cursor.is_empty());
        assert!(cursor.is_last());
        assert!(!cursor.advance());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn single_item_is_already_last() {
        let mut cursor = BrowseCursor::new(1);
        assert!(!cursor.advance());
        assert_eq!(cursor.index(), 0);
    }
}
