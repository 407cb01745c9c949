use super::Batch;
use std::num::NonZeroUsize;

/// splits `items` into contiguous batches of `batch_size`, the last of which
/// may be shorter. batches are derived lazily and borrow from `items`, so
/// calling this again restarts from the first batch.
pub fn batches<T>(
    items: &[T],
    batch_size: NonZeroUsize,
) -> impl ExactSizeIterator<Item = Batch<'_, T>> + '_ {
    let size = batch_size.get();
    items
        .chunks(size)
        .enumerate()
        .map(move |(index, items)| Batch {
            index,
            offset: index * size,
            items,
        })
}

/// number of batches [`batches`] yields for `n_items`
pub fn batch_count(n_items: usize, batch_size: NonZeroUsize) -> usize {
    n_items.div_ceil(batch_size.get())
}

#[cfg(test)]
mod tests {
    use super::{batch_count, batches};
    use std::num::NonZeroUsize;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("test batch size must be nonzero")
    }

    #[test]
    fn test_thirty_items_batch_of_twenty_five() {
        let items = (0..30).collect::<Vec<_>>();
        let result = batches(&items, size(25)).collect::<Vec<_>>();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].items, &items[0..25]);
        assert_eq!(result[1].items, &items[25..30]);
        assert_eq!(result[1].index, 1);
        assert_eq!(result[1].offset, 25);
    }

    #[test]
    fn test_partition_law() {
        for n in 0..60 {
            let items = (0..n).collect::<Vec<usize>>();
            for b in 1..=27 {
                let result = batches(&items, size(b)).collect::<Vec<_>>();
                assert_eq!(result.len(), n.div_ceil(b), "n={n} b={b}");
                assert_eq!(result.len(), batch_count(n, size(b)));
                if let Some((last, full)) = result.split_last() {
                    assert!(full.iter().all(|batch| batch.len() == b));
                    assert!(!last.is_empty() && last.len() <= b);
                }
                let rejoined = result
                    .iter()
                    .flat_map(|batch| batch.items.iter().copied())
                    .collect::<Vec<_>>();
                assert_eq!(rejoined, items, "n={n} b={b}");
            }
        }
    }

    #[test]
    fn test_restartable() {
        let items = vec!['a', 'b', 'c'];
        let first = batches(&items, size(2)).map(|b| b.items.to_vec()).collect::<Vec<_>>();
        let second = batches(&items, size(2)).map(|b| b.items.to_vec()).collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u8> = vec![];
        assert_eq!(batches(&items, size(25)).count(), 0);
    }
}
