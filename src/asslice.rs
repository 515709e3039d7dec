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

//! Trait definitions for contiguous sources an [`ArrayView`] can be built from.

use crate::view::ArrayView;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

mod private {
    pub trait Sealed {}
}

/// A contiguous source of elements that can be viewed as a read-only slice.
///
/// The set of implementors is closed: slices, fixed-size arrays, `Vec`, boxed
/// slices, strings (as bytes) and other views. Each one hands out nothing more
/// than a base pointer and a length; the view never calls back into it.
///
/// # Examples
///
/// ```rust
/// use arrayview::{ArrayView, AsSlice};
///
/// let vec = vec![1, 2, 3, 4, 5];
/// assert_eq!(vec.length(), 5);
/// assert_eq!(AsSlice::as_slice(&vec), &[1, 2, 3, 4, 5]);
///
/// let text = String::from("Test");
/// let view = ArrayView::of(&text);
/// assert_eq!(view.len(), 4);
/// ```
pub trait AsSlice: private::Sealed {
    /// The type of elements contained in the slice.
    type Item;

    /// Returns the number of elements.
    fn length(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns an immutable reference to the elements.
    fn as_slice(&self) -> &[Self::Item];
}

impl<T> private::Sealed for [T] {}
impl<T> AsSlice for [T] {
    type Item = T;
    fn as_slice(&self) -> &[Self::Item] {
        self
    }
}

impl<T, const N: usize> private::Sealed for [T; N] {}
impl<T, const N: usize> AsSlice for [T; N] {
    type Item = T;
    fn length(&self) -> usize {
        N
    }
    fn as_slice(&self) -> &[Self::Item] {
        self
    }
}

impl<T> private::Sealed for Vec<T> {}
impl<T> AsSlice for Vec<T> {
    type Item = T;
    fn length(&self) -> usize {
        self.len()
    }
    fn as_slice(&self) -> &[Self::Item] {
        self.as_slice()
    }
}

impl<T> private::Sealed for Box<[T]> {}
impl<T> AsSlice for Box<[T]> {
    type Item = T;
    fn as_slice(&self) -> &[Self::Item] {
        self
    }
}

// Strings are viewed as their UTF-8 bytes, without any terminator.
impl private::Sealed for str {}
impl AsSlice for str {
    type Item = u8;
    fn length(&self) -> usize {
        self.len()
    }
    fn as_slice(&self) -> &[Self::Item] {
        self.as_bytes()
    }
}

impl private::Sealed for String {}
impl AsSlice for String {
    type Item = u8;
    fn length(&self) -> usize {
        self.len()
    }
    fn as_slice(&self) -> &[Self::Item] {
        self.as_bytes()
    }
}

impl<T> private::Sealed for ArrayView<'_, T> {}
impl<T> AsSlice for ArrayView<'_, T> {
    type Item = T;
    fn length(&self) -> usize {
        self.len()
    }
    fn as_slice(&self) -> &[Self::Item] {
        ArrayView::as_slice(self)
    }
}
