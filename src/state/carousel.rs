//! Trip carousel: one trip card visible, stepped with Previous/Next.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: Option<usize>,
}

impl Carousel {
    /// Start on the most recent (last) entry.
    pub fn new(len: usize) -> Self {
        Self { len, index: len.checked_sub(1) }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    pub fn can_prev(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn can_next(&self) -> bool {
        matches!(self.index, Some(i) if i + 1 < self.len)
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.index = self.index.map(|i| i - 1);
        }
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.index = self.index.map(|i| i + 1);
        }
    }
}
