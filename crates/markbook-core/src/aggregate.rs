use crate::model::{ResultDataset, ResultRecord};

/// Combine per-document record batches into one dataset.
///
/// Plain ordered concatenation: batch order and within-batch order are
/// preserved exactly, so every record's position is traceable to its
/// source. No deduplication, sorting, or grouping.
pub fn aggregate<I>(batches: I) -> ResultDataset
where
    I: IntoIterator<Item = Vec<ResultRecord>>,
{
    batches.into_iter().flatten().collect()
}
