use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::mem::size_of;

use bytemuck::{AnyBitPattern, NoUninit};

use crate::core::DynVec;
use crate::error::DynVecError;

/// A `DynVec` whose element width is fixed by the type `T`.
///
/// Values go in and out by copy; the underlying storage is byte-aligned, so
/// elements are never handed out as `&T`. Width mismatches between `T` and the
/// storage are ruled out at compile time, except when converting from an
/// untyped vector with [`TypedDynVec::try_from_untyped`].
pub struct TypedDynVec<T> {
    inner: DynVec,
    _marker: PhantomData<T>,
}

impl<T> TypedDynVec<T>
where
    T: AnyBitPattern + NoUninit,
{
    /// Creates an empty vector. No allocation is performed.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidArgument` if `T` is zero-sized.
    pub fn new() -> Result<Self, DynVecError> {
        Ok(Self::wrap(DynVec::new(size_of::<T>())?))
    }

    /// Creates an empty vector with room for exactly `capacity` values.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidArgument` if `T` is zero-sized, or
    /// `DynVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynVecError> {
        Ok(Self::wrap(DynVec::with_capacity(size_of::<T>(), capacity)?))
    }

    /// Creates a vector holding a copy of `values`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidArgument` if `T` is zero-sized, or
    /// `DynVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn from_slice(values: &[T]) -> Result<Self, DynVecError> {
        let mut vec = Self::with_capacity(values.len())?;
        for value in values {
            vec.push_back(*value)?;
        }
        Ok(vec)
    }

    fn wrap(inner: DynVec) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// Reinterprets an untyped vector as holding `T` values.
    ///
    /// # Errors
    ///
    /// Returns the vector back inside `Err` if its element width differs from
    /// `size_of::<T>()`.
    pub fn try_from_untyped(inner: DynVec) -> Result<Self, (DynVec, DynVecError)> {
        if inner.element_width() != size_of::<T>() {
            return Err((
                inner,
                DynVecError::InvalidArgument {
                    reason: "element width differs from the size of the value type",
                },
            ));
        }
        Ok(Self::wrap(inner))
    }

    #[must_use]
    pub fn as_untyped(&self) -> &DynVec {
        &self.inner
    }

    #[must_use]
    pub fn into_untyped(self) -> DynVec {
        self.inner
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), DynVecError> {
        self.inner.reserve(min_capacity)
    }

    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }

    /// Returns a copy of the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T, DynVecError> {
        self.inner.get(index).map(bytemuck::pod_read_unaligned)
    }

    /// # Errors
    ///
    /// Returns `DynVecError::OutOfBounds` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), DynVecError> {
        self.inner.set(index, bytemuck::bytes_of(&value))
    }

    #[must_use]
    pub fn top(&self) -> Option<T> {
        self.inner.top().map(bytemuck::pod_read_unaligned)
    }

    /// Finds the first value whose bytes equal those of `value`.
    ///
    /// Comparison is bitwise, so for floats `-0.0` and `0.0` differ while equal
    /// NaN bit patterns match.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize> {
        self.inner.find(bytemuck::bytes_of(value))
    }

    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailure` if growing fails.
    pub fn push_back(&mut self, value: T) -> Result<(), DynVecError> {
        self.inner.push_back(bytemuck::bytes_of(&value))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.inner.pop_back().map(bytemuck::pod_read_unaligned)
    }

    /// # Errors
    ///
    /// Returns `DynVecError::OutOfBounds` if `index > len()`, or
    /// `DynVecError::AllocationFailure` if growing fails.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), DynVecError> {
        self.inner.insert_at(index, bytemuck::bytes_of(&value))
    }

    /// # Errors
    ///
    /// Returns `DynVecError::OutOfBounds` if `index >= len()`.
    pub fn delete_at(&mut self, index: usize) -> Result<(), DynVecError> {
        self.inner.delete_at(index)
    }

    pub fn erase_first(&mut self, value: &T) -> bool {
        self.inner.erase_first(bytemuck::bytes_of(value))
    }

    /// Sets the length to `new_len`. Values exposed by growing are unspecified.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailure` if growing fails.
    pub fn resize(&mut self, new_len: usize) -> Result<(), DynVecError> {
        self.inner.resize(new_len)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailure` if growing fails.
    pub fn concatenate(&mut self, source: &Self) -> Result<(), DynVecError> {
        self.inner.concatenate(&source.inner)
    }

    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailure` if growing fails.
    pub fn concatenate_self(&mut self) -> Result<(), DynVecError> {
        self.inner.concatenate_self()
    }

    /// Copies the values out into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.inner
            .as_bytes()
            .chunks_exact(size_of::<T>())
            .map(bytemuck::pod_read_unaligned)
            .collect()
    }
}

impl<T> PartialEq for TypedDynVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> fmt::Debug for TypedDynVec<T>
where
    T: AnyBitPattern + NoUninit + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}
