use num::PrimInt;

use super::error::CopyToError;
use super::index::start_position;

/// The capability set shared by element collections: counting, membership,
/// mutation, traversal and copy-out into a caller-owned buffer.
pub trait Collection<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether mutating operations are rejected.
    fn is_read_only(&self) -> bool;

    fn add(&mut self, item: T);

    /// Returns whether `item` was present before the call.
    fn remove(&mut self, item: &T) -> bool;

    fn contains(&self, item: &T) -> bool;

    fn clear(&mut self);

    fn iter(&self) -> Self::Iter<'_>;

    /// Clones every element into `destination`, starting at `start_index`,
    /// in iteration order.
    ///
    /// Fails without writing anything if `destination` is absent, if
    /// `start_index` is negative or if the elements do not fit.
    fn copy_to<IndexT>(&self, destination: Option<&mut [T]>, start_index: IndexT) -> Result<(), CopyToError>
    where
        T: Clone,
        IndexT: PrimInt,
    {
        let destination = destination.ok_or(CopyToError::NullDestination)?;
        let start = start_position(start_index)?;
        let required = self.len();
        let available = destination.len();
        let end = match start.checked_add(required) {
            Some(end) if end <= available => end,
            _ => return Err(CopyToError::InsufficientSpace { start, required, available }),
        };
        for (slot, item) in destination[start..end].iter_mut().zip(self.iter()) {
            slot.clone_from(item);
        }
        log::trace!("copied {} elements into [{}..{})", required, start, end);
        Ok(())
    }
}
