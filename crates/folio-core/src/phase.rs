//! Phrase cycling for the splash screen.

/// Index into an ordered phrase list that only moves forward.
///
/// Starts at 0 and stops permanently at `len - 1`; there is no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCycler {
    len: usize,
    index: usize,
}

impl PhaseCycler {
    /// Creates a cycler over `len` phrases. A zero length is treated as one.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            index: 0,
        }
    }

    /// Returns the active phrase index.
    pub fn current(&self) -> usize {
        self.index
    }

    /// Returns the number of phrases.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a cycler holds at least one phrase.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns whether the last phrase has been reached.
    pub fn is_finished(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Moves to the next phrase, returning the new index.
    ///
    /// Returns `None` once the last phrase is active.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_finished() {
            return None;
        }
        self.index += 1;
        Some(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let cycler = PhaseCycler::new(4);
        assert_eq!(cycler.current(), 0);
        assert!(!cycler.is_finished());
    }

    #[test]
    fn test_stops_at_last_phrase() {
        let mut cycler = PhaseCycler::new(4);
        assert_eq!(cycler.advance(), Some(1));
        assert_eq!(cycler.advance(), Some(2));
        assert_eq!(cycler.advance(), Some(3));
        assert!(cycler.is_finished());

        for _ in 0..10 {
            assert_eq!(cycler.advance(), None);
        }
        assert_eq!(cycler.current(), 3);
    }

    #[test]
    fn test_single_phrase_never_advances() {
        let mut cycler = PhaseCycler::new(1);
        assert!(cycler.is_finished());
        assert_eq!(cycler.advance(), None);
        assert_eq!(cycler.current(), 0);
    }

    #[test]
    fn test_zero_length_behaves_as_one() {
        let cycler = PhaseCycler::new(0);
        assert_eq!(cycler.len(), 1);
        assert!(cycler.is_finished());
    }
}
