//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! # ArrayView
//!
//! A Rust library providing a lightweight, non-owning, read-only view over a contiguous run of
//! elements. An [`ArrayView`] is a `(base, length)` pair: copying it never copies elements, and
//! narrowing it never touches the backing storage.
//!
//! ## Key Features
//!
//! - **Zero-copy**: Construction, copying and narrowing are constant time and never allocate
//! - **Borrow-checked**: The view borrows its storage, so it can never outlive it
//! - **Clamped Narrowing**: Prefix/suffix removal, `substring` and `slice` clamp out-of-range
//!   arguments instead of failing, so range operations chain without bounds checks
//! - **Checked and Unchecked Access**: `at()` reports out-of-range positions as errors,
//!   `get_unchecked()` skips the check for callers that already did it
//! - **Closed Set of Sources**: Views are built from slices, arrays, `Vec`, boxed slices,
//!   strings and other views through the sealed `AsSlice` trait
//!
//! ## Usage Examples
//!
//! ### Building Views
//!
//! ```rust
//! use arrayview::ArrayView;
//!
//! let array = [0, 1, 2, 3];
//! let vec = vec![0, 1, 2, 3];
//! let text = String::from("Test");
//!
//! let x0 = ArrayView::from_array(&array);
//! let x1 = ArrayView::from_vec(&vec);
//! let x2 = ArrayView::from(&text);
//! let x3 = ArrayView::<i32>::default();
//!
//! assert_eq!(x0, x1);
//! assert_eq!(x2.len(), 4);
//! assert!(x3.data().is_null());
//! ```
//!
//! ### Narrowing Views
//!
//! ```rust
//! use arrayview::ArrayView;
//!
//! let data = [0, 1, 2, 3];
//! let view = ArrayView::from_array(&data);
//!
//! // Pure extractors leave `view` untouched
//! assert_eq!(view.substring(1, 2), [1, 2]);
//! assert_eq!(view.substring(1, 8), [1, 2, 3]);
//! assert!(view.substring(5, 2).is_empty());
//!
//! assert_eq!(view.slice(1, 3), [1, 2]);
//! assert_eq!(view.slice(1, 8), [1, 2, 3]);
//! assert!(view.slice(5, 2).is_empty());
//!
//! // Mutators adjust the view itself and chain
//! let mut rest = view;
//! rest.pop_front().remove_suffix(1);
//! assert_eq!(rest, [1, 2]);
//! assert_eq!(view.len(), 4);
//! ```
//!
//! ### Element Access
//!
//! ```rust
//! use arrayview::{ArrayView, ArrayViewError};
//!
//! let view = ArrayView::from_array(&[0, 1, 2, 3]);
//!
//! assert_eq!(view[2], 2);
//! assert_eq!(view.front(), Some(&0));
//! assert_eq!(view.back(), Some(&3));
//! assert_eq!(view.at(4), Err(ArrayViewError::OutOfRange { pos: 4, len: 4 }));
//! ```
//!
//! ## Error Handling
//!
//! Operations that can fail return `ArrayViewResult<T>` which can contain the following errors:
//!
//! - `ArrayViewError::OutOfRange`: `at()` was called with a position past the end
//! - `ArrayViewError::InvalidText`: a byte view was read as text but is not valid UTF-8
//!
//! Indexing with `[]` panics on an out-of-range position, like slice indexing.
//!
//! ## Thread Safety
//!
//! A view is `Send` and `Sync` whenever its element type is `Sync`. Copies are independent
//! values; mutating one view never affects another, even when both alias the same storage.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![cfg_attr(not(test), no_std)]
#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

extern crate alloc;

mod asslice;
mod ranges;
mod result;
mod view;

pub use self::asslice::AsSlice;
pub use self::result::{ArrayViewError, ArrayViewResult};
pub use self::view::ArrayView;
