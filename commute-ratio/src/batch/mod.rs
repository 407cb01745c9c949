mod batch;
mod batch_ops;
mod batch_size;

pub use batch::Batch;
pub use batch_ops::{batch_count, batches};
pub use batch_size::{BatchSize, MAX_BATCH_SIZE};
