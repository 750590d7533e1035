#![no_std]

//! `DynVec`: a growable vector of fixed-width, type-erased elements.
//!
//! The element type is chosen at run time by its byte width. Every element is an
//! opaque block of exactly that many bytes; the vector never looks inside an
//! element except to compare it byte-for-byte in [`DynVec::find`] and
//! [`DynVec::erase_first`]. When the element type is known at compile time, use
//! [`TypedDynVec`], which fixes the width from the type and moves values in and
//! out by copy.
//!
//! All elements live back to back in a single owned allocation. An empty vector
//! with zero capacity holds no allocation.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`: O(1) amortized - capacity doubles when full
//! - `pop_back()`, `get()`, `set()`, `top()`: O(1)
//! - `insert_at()`, `delete_at()`: O(n) - elements after the index are shifted
//! - `find()`, `erase_first()`: O(n) - linear scan with byte comparison
//! - `concatenate()`: O(m) for a source of m elements, plus at most one reallocation
//!
//! ## Growth Policy
//! - Implicit growth sets the capacity to `max(1, capacity * 2)`
//!   ([`GROWTH_FACTOR`], [`MIN_GROWTH_CAPACITY`])
//! - `reserve()` and `resize()` grow to exactly the requested capacity
//! - Nothing shrinks the capacity except `shrink_to_fit()`, `clear()` and `destroy()`
//!
//! ## Error Handling
//! - Every fallible operation returns `Result<_, DynVecError>`; nothing panics
//!   on a bad index or a failed allocation
//! - A failed call leaves the vector exactly as it was
//!
//! ## `no_std` Compatibility
//!
//! This crate only needs `core` and `alloc`. Enable the optional `std` feature to
//! get `std::error::Error` wiring through `thiserror`:
//! ```toml
//! [dependencies]
//! dynvec = { version = "0.1", features = ["std"] }
//! ```
//!
//! ## Logging
//!
//! Reallocations and releases are reported at `trace` level, failed allocations at
//! `debug` level, through the `log` facade. Install any `log`-compatible logger to
//! see them.
//!
//! # Vector Interface
//!
//! ```
//! # use dynvec::DynVec;
//! let mut ints = DynVec::new(4).unwrap();
//!
//! for value in 1i32..=5 {
//!     ints.push_back(&value.to_le_bytes()).unwrap();
//! }
//! assert_eq!(ints.len(), 5);
//! assert_eq!(ints.get(2).unwrap(), &3i32.to_le_bytes());
//!
//! ints.delete_at(0).unwrap();
//! assert_eq!(ints.len(), 4);
//! assert_eq!(ints.get(0).unwrap(), &2i32.to_le_bytes());
//!
//! // Indices past the end are reported, never clamped
//! assert!(ints.get(4).is_err());
//! ```
//!
//! # Search Interface
//!
//! ```
//! # use dynvec::DynVec;
//! let mut chars = DynVec::from_bytes(1, b"ABCDE").unwrap();
//!
//! assert_eq!(chars.find(b"C"), Some(2));
//! assert!(chars.erase_first(b"C"));
//! assert_eq!(chars.as_bytes(), b"ABDE");
//!
//! // Erasing a missing value is a no-op
//! assert!(!chars.erase_first(b"Z"));
//! assert_eq!(chars.len(), 4);
//! ```
//!
//! # Stack Interface
//!
//! ```
//! # use dynvec::DynVec;
//! let mut stack = DynVec::new(2).unwrap();
//!
//! stack.push_back(b"ab").unwrap();
//! stack.push_back(b"cd").unwrap();
//! assert_eq!(stack.top(), Some(&b"cd"[..]));
//!
//! assert_eq!(stack.pop_back(), Some(&b"cd"[..]));
//! assert_eq!(stack.pop_back(), Some(&b"ab"[..]));
//! assert_eq!(stack.pop_back(), None);
//!
//! // Popping keeps the allocation; trimming is explicit
//! assert_eq!(stack.capacity(), 2);
//! stack.shrink_to_fit();
//! assert_eq!(stack.capacity(), 0);
//! ```
//!
//! # Typed Interface
//!
//! ```
//! # use dynvec::TypedDynVec;
//! let mut left = TypedDynVec::<u32>::from_slice(&[1, 2, 3]).unwrap();
//! let right = TypedDynVec::<u32>::from_slice(&[4, 5]).unwrap();
//!
//! left.concatenate(&right).unwrap();
//! left.insert_at(0, 0).unwrap();
//! assert_eq!(left.to_vec(), [0, 1, 2, 3, 4, 5]);
//! assert_eq!(left.pop_back(), Some(5));
//! ```

extern crate alloc;

mod core;
mod error;
mod layout;
mod typed;

// Re-export public types and constants
pub use crate::core::{DynVec, GROWTH_FACTOR, MIN_GROWTH_CAPACITY};
pub use error::DynVecError;
pub use typed::TypedDynVec;
