//! Static partitioning of a stage's groups across worker threads

use std::ops::Range;

use crate::error::FftError;

/// Contiguous range of group indices that `worker` processes during one stage.
///
/// Every worker is handed `ceil(num_groups / num_workers)` groups, so the trailing workers
/// get a short or empty range once a stage has fewer groups than there are workers. The
/// ranges of all workers are disjoint and together cover `0..num_groups`.
///
/// # Errors
///
/// Returns [`FftError::InvalidThreadCount`] if `num_workers == 0`.
pub(crate) fn group_range(
    worker: usize,
    num_workers: usize,
    num_groups: usize,
) -> Result<Range<usize>, FftError> {
    if num_workers == 0 {
        return Err(FftError::InvalidThreadCount);
    }

    let groups_per_worker = num_groups.div_ceil(num_workers);
    let start = worker.saturating_mul(groups_per_worker).min(num_groups);
    let end = start.saturating_add(groups_per_worker).min(num_groups);

    Ok(start..end)
}

/// Range of sequence indices covered by the groups `groups` of span `span`
#[inline]
pub(crate) fn element_range(groups: &Range<usize>, span: usize) -> Range<usize> {
    groups.start * span..groups.end * span
}
