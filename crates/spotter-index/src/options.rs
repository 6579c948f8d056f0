/// Indexing options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOptions {
    /// Apply inherited `text-transform` styles to text leaves (default: true).
    pub(crate) apply_text_transform: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            apply_text_transform: true,
        }
    }
}

impl IndexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether text leaves are case-transformed per their inherited style.
    pub fn apply_text_transform(mut self, apply: bool) -> Self {
        self.apply_text_transform = apply;
        self
    }

    pub fn get_apply_text_transform(&self) -> bool {
        self.apply_text_transform
    }
}
