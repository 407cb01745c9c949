/// a contiguous, ordered view over part of a larger sequence
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a, T> {
    /// position of this batch in the batch sequence
    pub index: usize,
    /// position of the first item within the full sequence
    pub offset: usize,
    pub items: &'a [T],
}

impl<T> Batch<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
