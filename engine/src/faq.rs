/// Single-selection collapsible accordion: at most one item is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
    selected: usize,
}

impl Accordion {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: None,
            selected: 0,
        }
    }

    #[must_use]
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open `index`, closing any other item; collapse it if already open.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }
}
