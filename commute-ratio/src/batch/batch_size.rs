use serde::{Deserialize, Serialize};
use std::{fmt::Display, num::NonZeroUsize};

/// largest number of origins or destinations the distance matrix API accepts
/// in one request
pub const MAX_BATCH_SIZE: usize = 25;

/// number of areas submitted per distance matrix request, in `1..=25`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "usize", into = "usize")]
pub struct BatchSize(NonZeroUsize);

impl BatchSize {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(MAX_BATCH_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for BatchSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value > MAX_BATCH_SIZE {
            return Err(format!(
                "batch size {value} exceeds the distance matrix maximum of {MAX_BATCH_SIZE}"
            ));
        }
        NonZeroUsize::new(value)
            .map(BatchSize)
            .ok_or_else(|| String::from("batch size must be greater than zero"))
    }
}

impl From<BatchSize> for usize {
    fn from(value: BatchSize) -> Self {
        value.get()
    }
}

impl From<BatchSize> for NonZeroUsize {
    fn from(value: BatchSize) -> Self {
        value.0
    }
}

impl Display for BatchSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
