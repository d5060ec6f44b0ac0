/// Single-open accordion over `len` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Opens `index`, or closes it if it is already the open one.
    /// Indices outside the list leave the state untouched.
    pub fn activate(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { open, ..self }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}
