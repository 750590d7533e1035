use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use crate::error::DynVecError;
use crate::layout::ElementLayout;

/// Factor applied to the capacity when a full vector needs room for one more element.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity a never-allocated vector grows to on its first implicit growth.
pub const MIN_GROWTH_CAPACITY: usize = 1;

/// A growable vector of fixed-width, type-erased elements.
///
/// Every element is an opaque block of `element_width` bytes. Elements are stored
/// back to back in a single owned allocation of `capacity * element_width` bytes;
/// a vector with zero capacity holds no allocation at all.
///
/// Storage only grows implicitly. Removing elements never gives memory back, use
/// [`DynVec::shrink_to_fit`] to trim.
pub struct DynVec {
    // Invariant: `storage.len() == capacity * element_width`. Bytes past
    // `len * element_width` are spare slots with unspecified content.
    storage: Vec<u8>,
    len: usize,
    layout: ElementLayout,
}

impl DynVec {
    /// Creates an empty vector for elements of `element_width` bytes.
    ///
    /// No allocation is performed.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidArgument` if `element_width` is 0.
    pub fn new(element_width: usize) -> Result<Self, DynVecError> {
        Ok(Self {
            storage: Vec::new(),
            len: 0,
            layout: ElementLayout::new(element_width)?,
        })
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidArgument` if `element_width` is 0, or
    /// `DynVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn with_capacity(element_width: usize, capacity: usize) -> Result<Self, DynVecError> {
        let mut vec = Self::new(element_width)?;
        vec.reserve(capacity)?;
        Ok(vec)
    }

    /// Creates a vector from packed element bytes.
    ///
    /// The capacity of the result equals its length.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidArgument` if `element_width` is 0 or
    /// `bytes.len()` is not a multiple of it, or `DynVecError::AllocationFailure`
    /// if the storage cannot be allocated.
    pub fn from_bytes(element_width: usize, bytes: &[u8]) -> Result<Self, DynVecError> {
        let mut vec = Self::new(element_width)?;
        if bytes.len() % element_width != 0 {
            return Err(DynVecError::InvalidArgument {
                reason: "byte length is not a multiple of element width",
            });
        }
        let count = bytes.len() / element_width;
        vec.reserve(count)?;
        vec.storage.copy_from_slice(bytes);
        vec.len = count;
        Ok(vec)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current allocation holds without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len() / self.layout.width()
    }

    #[must_use]
    pub fn element_width(&self) -> usize {
        self.layout.width()
    }

    /// Returns the live elements as one packed byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[self.layout.span(0, self.len)]
    }

    fn check_index(&self, index: usize) -> Result<(), DynVecError> {
        if index >= self.len {
            return Err(DynVecError::OutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(())
    }

    /// Reallocates to exactly `new_capacity` elements, which must exceed the
    /// current capacity. On failure nothing is changed.
    #[cold]
    fn grow_to(&mut self, new_capacity: usize) -> Result<(), DynVecError> {
        let old_capacity = self.capacity();
        debug_assert!(new_capacity > old_capacity);

        let Some(new_bytes) = self.layout.byte_len(new_capacity) else {
            debug!(
                "dynvec: capacity {} x {} bytes exceeds the addressable size",
                new_capacity,
                self.layout.width()
            );
            return Err(DynVecError::AllocationFailure {
                capacity: new_capacity,
            });
        };

        if let Err(err) = self
            .storage
            .try_reserve_exact(new_bytes - self.storage.len())
        {
            debug!("dynvec: allocation of {new_bytes} bytes failed: {err}");
            return Err(DynVecError::AllocationFailure {
                capacity: new_capacity,
            });
        }
        self.storage.resize(new_bytes, 0);

        trace!(
            "dynvec: grew capacity {} -> {} (element width {})",
            old_capacity,
            new_capacity,
            self.layout.width()
        );
        Ok(())
    }

    /// Makes room for one more element, doubling the capacity if the vector is full.
    fn grow_for_one(&mut self) -> Result<(), DynVecError> {
        let capacity = self.capacity();
        if self.len < capacity {
            return Ok(());
        }
        let new_capacity = capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(DynVecError::AllocationFailure {
                capacity: usize::MAX,
            })?
            .max(MIN_GROWTH_CAPACITY);
        self.grow_to(new_capacity)
    }

    /// Ensures the vector can hold at least `min_capacity` elements.
    ///
    /// Grows the allocation to exactly `min_capacity` in a single step if it is
    /// currently smaller; never shrinks. Existing elements keep their offsets.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailure` if the storage cannot be
    /// allocated. The vector is unchanged in that case.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), DynVecError> {
        if min_capacity > self.capacity() {
            self.grow_to(min_capacity)?;
        }
        Ok(())
    }

    /// Trims the capacity to the current length.
    ///
    /// An empty vector releases its allocation entirely.
    pub fn shrink_to_fit(&mut self) {
        if self.len == self.capacity() {
            return;
        }
        if self.len == 0 {
            self.destroy();
            return;
        }
        let old_capacity = self.capacity();
        self.storage.truncate(self.layout.span(0, self.len).end);
        self.storage.shrink_to_fit();
        trace!(
            "dynvec: trimmed capacity {} -> {} (element width {})",
            old_capacity,
            self.len,
            self.layout.width()
        );
    }

    /// Gets the bytes of the element at `index`.
    ///
    /// The returned slice borrows the vector, so any mutation invalidates it.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&[u8], DynVecError> {
        self.check_index(index)?;
        Ok(&self.storage[self.layout.slot(index)])
    }

    /// Gets mutable access to the bytes of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfBounds` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut [u8], DynVecError> {
        self.check_index(index)?;
        Ok(&mut self.storage[self.layout.slot(index)])
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfBounds` if `index >= len()`, or
    /// `DynVecError::InvalidArgument` if `value` is not `element_width()` bytes.
    pub fn set(&mut self, index: usize, value: &[u8]) -> Result<(), DynVecError> {
        self.check_index(index)?;
        self.layout.check_value(value)?;
        self.storage[self.layout.slot(index)].copy_from_slice(value);
        Ok(())
    }

    /// Returns the last element without removing it, or `None` if the vector is empty.
    #[must_use]
    pub fn top(&self) -> Option<&[u8]> {
        let last = self.len.checked_sub(1)?;
        Some(&self.storage[self.layout.slot(last)])
    }

    /// Finds the first element byte-equal to `value`.
    ///
    /// A `value` whose length differs from `element_width()` never matches.
    #[must_use]
    pub fn find(&self, value: &[u8]) -> Option<usize> {
        if value.len() != self.layout.width() {
            return None;
        }
        self.as_bytes()
            .chunks_exact(self.layout.width())
            .position(|element| element == value)
    }

    /// Appends an element, doubling the capacity if the vector is full.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidArgument` if `value` is not `element_width()`
    /// bytes, or `DynVecError::AllocationFailure` if growing fails. The vector
    /// is unchanged on error.
    pub fn push_back(&mut self, value: &[u8]) -> Result<(), DynVecError> {
        self.layout.check_value(value)?;
        self.grow_for_one()?;
        self.storage[self.layout.slot(self.len)].copy_from_slice(value);
        self.len += 1;
        Ok(())
    }

    /// Removes the last element and returns its bytes.
    ///
    /// Returns `None`, leaving the vector untouched, if it is empty. The capacity
    /// is kept.
    pub fn pop_back(&mut self) -> Option<&[u8]> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(&self.storage[self.layout.slot(self.len)])
    }

    /// Inserts an element at `index`, shifting the elements after it one slot back.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfBounds` if `index > len()`,
    /// `DynVecError::InvalidArgument` if `value` is not `element_width()` bytes,
    /// or `DynVecError::AllocationFailure` if growing fails. The vector is
    /// unchanged on error.
    pub fn insert_at(&mut self, index: usize, value: &[u8]) -> Result<(), DynVecError> {
        if index > self.len {
            return Err(DynVecError::OutOfBounds {
                index,
                length: self.len,
            });
        }
        self.layout.check_value(value)?;
        self.grow_for_one()?;

        let tail = self.layout.span(index, self.len);
        self.storage
            .copy_within(tail, self.layout.slot(index + 1).start);
        self.storage[self.layout.slot(index)].copy_from_slice(value);
        self.len += 1;
        Ok(())
    }

    fn remove_unchecked(&mut self, index: usize) {
        let tail = self.layout.span(index + 1, self.len);
        self.storage.copy_within(tail, self.layout.slot(index).start);
        self.len -= 1;
    }

    /// Removes the element at `index`, shifting the elements after it one slot forward.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfBounds` if `index >= len()`.
    pub fn delete_at(&mut self, index: usize) -> Result<(), DynVecError> {
        self.check_index(index)?;
        self.remove_unchecked(index);
        Ok(())
    }

    /// Removes the first element byte-equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn erase_first(&mut self, value: &[u8]) -> bool {
        match self.find(value) {
            Some(index) => {
                self.remove_unchecked(index);
                true
            }
            None => false,
        }
    }

    /// Sets the length to `new_len`.
    ///
    /// Shrinking drops the trailing elements and keeps the capacity. Growing
    /// reserves at least `new_len` elements; the content of the newly exposed
    /// elements is unspecified and must be written before it is read.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailure` if growing fails. The vector is
    /// unchanged in that case.
    pub fn resize(&mut self, new_len: usize) -> Result<(), DynVecError> {
        if new_len > self.len {
            self.reserve(new_len)?;
        }
        self.len = new_len;
        Ok(())
    }

    /// Releases the storage and resets to the freshly constructed state.
    ///
    /// The element width is kept.
    pub fn clear(&mut self) {
        self.destroy();
    }

    /// Releases the storage, leaving an empty vector with no allocation.
    ///
    /// Calling it again, or reading from the vector afterwards, is harmless.
    pub fn destroy(&mut self) {
        if self.storage.capacity() != 0 {
            trace!(
                "dynvec: released capacity {} (element width {})",
                self.capacity(),
                self.layout.width()
            );
        }
        self.storage = Vec::new();
        self.len = 0;
    }

    /// Appends all elements of `source`, in order.
    ///
    /// Grows the capacity to exactly the combined length if needed. `source` is
    /// not modified.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidArgument` if the element widths differ, or
    /// `DynVecError::AllocationFailure` if growing fails. Neither vector is
    /// changed on error.
    pub fn concatenate(&mut self, source: &DynVec) -> Result<(), DynVecError> {
        if source.layout != self.layout {
            return Err(DynVecError::InvalidArgument {
                reason: "element widths of concatenated vectors differ",
            });
        }
        let new_len = self.reserve_for_append(source.len)?;
        self.storage[self.layout.span(self.len, new_len)].copy_from_slice(source.as_bytes());
        self.len = new_len;
        Ok(())
    }

    /// Appends a copy of the vector's own elements, so `[a, b]` becomes `[a, b, a, b]`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailure` if growing fails. The vector is
    /// unchanged in that case.
    pub fn concatenate_self(&mut self) -> Result<(), DynVecError> {
        let new_len = self.reserve_for_append(self.len)?;
        let start = self.layout.span(self.len, new_len).start;
        self.storage.copy_within(self.layout.span(0, self.len), start);
        self.len = new_len;
        Ok(())
    }

    fn reserve_for_append(&mut self, additional: usize) -> Result<usize, DynVecError> {
        let new_len = self
            .len
            .checked_add(additional)
            .ok_or(DynVecError::AllocationFailure {
                capacity: usize::MAX,
            })?;
        self.reserve(new_len)?;
        Ok(new_len)
    }

    /// Creates a deep copy whose capacity equals its length.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailure` if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, DynVecError> {
        let mut copy = Self {
            storage: Vec::new(),
            len: 0,
            layout: self.layout,
        };
        copy.concatenate(self)?;
        Ok(copy)
    }
}

impl PartialEq for DynVec {
    fn eq(&self, other: &Self) -> bool {
        self.layout == other.layout && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for DynVec {}

impl fmt::Debug for DynVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynVec")
            .field("element_width", &self.layout.width())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("bytes", &self.as_bytes())
            .finish()
    }
}
