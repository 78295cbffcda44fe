// Contact Modal State
// Open/closed flag plus the highlighted contact option

use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ContactModal {
    open: bool,
    selected: usize,
    len: usize,
}

impl ContactModal {
    pub fn new(len: usize) -> Self {
        Self {
            open: false,
            selected: 0,
            len,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Open with the first option highlighted
    pub fn open(&mut self) {
        if !self.open {
            debug!("contact modal opened");
        }
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        if self.open {
            debug!("contact modal closed");
        }
        self.open = false;
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + 1) % self.len;
        }
    }

    pub fn select_previous(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + self.len - 1) % self.len;
        }
    }
}
