use std::{
    borrow::Borrow,
    fmt,
    hash::{BuildHasher, Hash},
};

use hashbrown::{hash_set, DefaultHashBuilder, HashSet};
use num::PrimInt;

use super::collection::Collection;
use super::error::CopyToError;

/// An unordered set of distinct elements.
///
/// Adding an element that is already present is a no-op. Iteration order is
/// unspecified and may change after any mutation.
#[derive(Clone)]
pub struct KeySet<T, S = DefaultHashBuilder> {
    inner: HashSet<T, S>,
}

impl<T> KeySet<T, DefaultHashBuilder> {
    pub fn new() -> Self {
        KeySet { inner: HashSet::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        KeySet { inner: HashSet::with_capacity(capacity) }
    }
}

impl<T, S> Default for KeySet<T, S>
where
    S: Default,
{
    fn default() -> Self {
        KeySet { inner: HashSet::default() }
    }
}

impl<T, S> KeySet<T, S> {
    pub fn with_hasher(hasher: S) -> Self {
        KeySet { inner: HashSet::with_hasher(hasher) }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        KeySet { inner: HashSet::with_capacity_and_hasher(capacity, hasher) }
    }

    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Always `false`: a `KeySet` held by `&mut` can be mutated.
    pub fn is_read_only(&self) -> bool {
        false
    }

    /// Visits the current elements once each, in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.inner.iter()
    }

    pub fn clear(&mut self) {
        log::trace!("clearing {} elements", self.inner.len());
        self.inner.clear();
    }

    pub fn drain(&mut self) -> hash_set::Drain<'_, T> {
        self.inner.drain()
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(f);
    }
}

impl<T, S> KeySet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Adds `item` unless an equal element is already present.
    ///
    /// Use [`KeySet::insert`] to learn whether anything was added.
    pub fn add(&mut self, item: T) {
        self.inner.insert(item);
    }

    /// Adds `item`, returning `true` if it was not present before.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    /// Removes `item`, returning whether it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(item)
    }

    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.take(item)
    }

    pub fn reserve(&mut self, additional: usize) {
        log::trace!("reserving room for {} more elements", additional);
        self.inner.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }

    /// See [`Collection::copy_to`].
    pub fn copy_to<IndexT>(&self, destination: Option<&mut [T]>, start_index: IndexT) -> Result<(), CopyToError>
    where
        T: Clone,
        IndexT: PrimInt,
    {
        <Self as Collection<T>>::copy_to(self, destination, start_index)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.iter().cloned().collect()
    }
}

impl<T, S> Collection<T> for KeySet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Iter<'a> = hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_read_only(&self) -> bool {
        KeySet::is_read_only(self)
    }

    fn add(&mut self, item: T) {
        KeySet::add(self, item);
    }

    fn remove(&mut self, item: &T) -> bool {
        self.inner.remove(item)
    }

    fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    fn clear(&mut self) {
        KeySet::clear(self);
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.inner.iter()
    }
}

impl<T, S> PartialEq for KeySet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T, S> Eq for KeySet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T, S> fmt::Debug for KeySet<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<T, S> FromIterator<T> for KeySet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        KeySet { inner: HashSet::from_iter(iter) }
    }
}

impl<T, S> Extend<T> for KeySet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for KeySet<T, S>
where
    T: 'a + Eq + Hash + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, S> IntoIterator for KeySet<T, S> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a KeySet<T, S> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
