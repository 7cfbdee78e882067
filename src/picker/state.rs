/// Where the dispatcher currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Listing,
    EmptyListing,
    CreateDialogOpen,
    Terminated,
}

/// Highlight, dialog flag and the terminal `done` flag for one run.
///
/// `current_index` is kept inside `0..len` whenever the list is non-empty.
/// Once `terminated` is set nothing else may change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current_index: usize,
    create_dialog_open: bool,
    terminated: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn create_dialog_open(&self) -> bool {
        self.create_dialog_open
    }

    pub fn terminated(&self) -> bool {
        self.terminated
    }

    pub fn phase(&self, len: usize) -> Phase {
        if self.terminated {
            Phase::Terminated
        } else if self.create_dialog_open {
            Phase::CreateDialogOpen
        } else if len == 0 {
            Phase::EmptyListing
        } else {
            Phase::Listing
        }
    }

    /// Highlight `index`, clamped to the last row.
    pub fn select(&mut self, index: usize, len: usize) {
        if self.terminated || len == 0 {
            return;
        }
        self.current_index = index.min(len - 1);
    }

    /// Move by `delta` rows, clamping at both ends.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        let target = self.current_index.saturating_add_signed(delta);
        self.select(target, len);
    }

    pub fn select_last(&mut self, len: usize) {
        self.select(usize::MAX, len);
    }

    pub fn set_create_dialog_open(&mut self, open: bool) {
        if !self.terminated {
            self.create_dialog_open = open;
        }
    }

    /// Check-and-set of the write-once gate. Returns `false` if already terminated.
    pub fn terminate(&mut self) -> bool {
        if self.terminated {
            return false;
        }
        self.terminated = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let s = SelectionState::new();
        assert_eq!(s.current_index(), 0);
        assert!(!s.create_dialog_open());
        assert!(!s.terminated());
    }

    #[test]
    fn select_clamps_high() {
        let mut s = SelectionState::new();
        s.select(10, 3);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn move_clamps_low() {
        let mut s = SelectionState::new();
        s.move_by(-5, 3);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn move_sequence_stays_in_bounds() {
        let mut s = SelectionState::new();
        let len = 4;
        for delta in [1, 1, 1, 1, 1, -10, 3, 10, -1, 2, -2, 7] {
            s.move_by(delta, len);
            assert!(s.current_index() < len);
        }
    }

    #[test]
    fn select_last() {
        let mut s = SelectionState::new();
        s.select_last(5);
        assert_eq!(s.current_index(), 4);
    }

    #[test]
    fn select_on_empty_is_noop() {
        let mut s = SelectionState::new();
        s.select(3, 0);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn phases() {
        let mut s = SelectionState::new();
        assert_eq!(s.phase(0), Phase::EmptyListing);
        assert_eq!(s.phase(2), Phase::Listing);
        s.set_create_dialog_open(true);
        assert_eq!(s.phase(2), Phase::CreateDialogOpen);
        s.terminate();
        assert_eq!(s.phase(2), Phase::Terminated);
    }

    #[test]
    fn terminate_is_write_once() {
        let mut s = SelectionState::new();
        assert!(s.terminate());
        assert!(!s.terminate());
    }

    #[test]
    fn frozen_after_terminate() {
        let mut s = SelectionState::new();
        s.select(1, 3);
        s.terminate();
        s.select(2, 3);
        s.set_create_dialog_open(true);
        assert_eq!(s.current_index(), 1);
        assert!(!s.create_dialog_open());
    }
}
