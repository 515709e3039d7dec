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

//! Implementation of the non-owning array view.

use crate::asslice::AsSlice;
use crate::ranges::{clamp_bounds, clamp_offset, clamp_span};
use crate::result::{ArrayViewError, ArrayViewResult};
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Rev;
use core::ops::{Index, Range, RangeBounds};
use core::{ptr, slice};

/// A read-only window onto a contiguous run of `T`.
///
/// An `ArrayView` is a `(base, length)` pair borrowed from storage it does not
/// own. Copying a view copies the pair, never the elements, so any number of
/// views may alias the same or overlapping storage. The lifetime `'a` ties every
/// view to its backing storage; the borrow checker rejects any use of a view
/// after that storage is dropped or structurally modified.
///
/// The default view has a null base and length zero. Narrowing operations
/// clamp out-of-range arguments instead of failing; [`ArrayView::at`] is the
/// only operation that reports an error.
///
/// # Examples
///
/// ```rust
/// use arrayview::ArrayView;
///
/// let data = [0, 1, 2, 3];
/// let mut view = ArrayView::from_array(&data);
///
/// assert_eq!(view.substring(1, 2), [1, 2]);
/// assert_eq!(view.slice(1, 8), [1, 2, 3]);
/// assert!(view.at(4).is_err());
///
/// view.pop_front().remove_suffix(2);
/// assert_eq!(view, [1]);
/// assert_eq!(view.data(), data[1..].as_ptr());
/// ```
pub struct ArrayView<'a, T> {
    slice: Option<&'a [T]>,
}

static_assertions::assert_eq_size!(ArrayView<'static, u64>, &'static [u64]);
static_assertions::assert_impl_all!(ArrayView<'static, i32>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(ArrayView<'static, Vec<u8>>: Copy);
static_assertions::assert_not_impl_any!(ArrayView<'static, core::cell::Cell<i32>>: Send, Sync);

impl<'a, T> ArrayView<'a, T> {
    /// Creates the empty view with a null base.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayview::ArrayView;
    ///
    /// let view = ArrayView::<i32>::empty();
    /// assert!(view.is_empty());
    /// assert!(view.data().is_null());
    /// ```
    pub const fn empty() -> Self {
        Self { slice: None }
    }

    /// Creates a view covering every element of `slice`.
    pub const fn new(slice: &'a [T]) -> Self {
        Self { slice: Some(slice) }
    }

    /// Creates a view covering all `N` elements of a fixed-size array.
    pub const fn from_array<const N: usize>(array: &'a [T; N]) -> Self {
        Self::new(array)
    }

    /// Creates a view covering the elements currently held by `vec`.
    ///
    /// The view keeps `vec` borrowed, so it cannot be resized while the view is alive.
    #[allow(clippy::ptr_arg)]
    pub fn from_vec(vec: &'a Vec<T>) -> Self {
        Self::new(vec.as_slice())
    }

    /// Creates a view over any contiguous source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayview::ArrayView;
    ///
    /// let boxed: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();
    /// let view = ArrayView::of(&boxed);
    /// assert_eq!(view.data(), boxed.as_ptr());
    /// assert_eq!(view.len(), 3);
    /// ```
    pub fn of<S>(source: &'a S) -> Self
    where
        S: AsSlice<Item = T> + ?Sized,
    {
        Self::new(source.as_slice())
    }

    /// Creates a view of `len` elements starting at `data`.
    ///
    /// A null `data` yields the empty view regardless of `len`.
    ///
    /// # Safety
    ///
    /// If `data` is non-null it must satisfy the requirements of
    /// [`core::slice::from_raw_parts`]: `len` consecutive, initialized, properly
    /// aligned elements that live for `'a` and are not mutated during `'a`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayview::ArrayView;
    ///
    /// let view = unsafe { ArrayView::<i32>::from_raw_parts(std::ptr::null(), 4) };
    /// assert!(view.is_empty());
    /// ```
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        if data.is_null() {
            return Self::empty();
        }
        // SAFETY: the caller guarantees `data` points to `len` live elements for `'a`.
        Self::new(unsafe { slice::from_raw_parts(data, len) })
    }

    /// Returns the number of elements in the view.
    pub const fn len(&self) -> usize {
        match self.slice {
            Some(slice) => slice.len(),
            None => 0,
        }
    }

    /// Returns `true` if the view has no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the base pointer, null for a view that was never given storage or was cleared.
    pub const fn data(&self) -> *const T {
        match self.slice {
            Some(slice) => slice.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Returns the viewed elements as a slice bound to the backing storage.
    pub const fn as_slice(&self) -> &'a [T] {
        match self.slice {
            Some(slice) => slice,
            None => &[],
        }
    }

    /// Returns the element at `pos`, or `None` if `pos` is out of range.
    pub fn get(&self, pos: usize) -> Option<&'a T> {
        self.as_slice().get(pos)
    }

    /// Returns the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayViewError::OutOfRange`] if `pos >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayview::{ArrayView, ArrayViewError};
    ///
    /// let view = ArrayView::from_array(&[0, 1, 2, 3]);
    /// assert_eq!(view.at(3), Ok(&3));
    /// assert_eq!(view.at(4), Err(ArrayViewError::OutOfRange { pos: 4, len: 4 }));
    /// ```
    pub fn at(&self, pos: usize) -> ArrayViewResult<&'a T> {
        self.get(pos).ok_or(ArrayViewError::OutOfRange {
            pos,
            len: self.len(),
        })
    }

    /// Returns the element at `pos` without bounds checking.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `self.len()`. Debug builds assert this.
    pub unsafe fn get_unchecked(&self, pos: usize) -> &'a T {
        debug_assert!(
            pos < self.len(),
            "ArrayView::get_unchecked: position {pos} out of range for length {}",
            self.len()
        );
        // SAFETY: the caller guarantees `pos < len`.
        unsafe { self.as_slice().get_unchecked(pos) }
    }

    /// Returns the first element, or `None` if the view is empty.
    pub fn front(&self) -> Option<&'a T> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` if the view is empty.
    pub fn back(&self) -> Option<&'a T> {
        self.as_slice().last()
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over the elements, back to front.
    pub fn iter_rev(&self) -> Rev<slice::Iter<'a, T>> {
        self.iter().rev()
    }

    /// Returns `true` if both views have the same length and equal elements in order.
    pub fn equals<U>(&self, other: &ArrayView<'_, U>) -> bool
    where
        T: PartialEq<U>,
    {
        self.as_slice() == other.as_slice()
    }

    /// Returns `true` if both views have the same length and `pred` holds for
    /// every pair of corresponding elements.
    ///
    /// `pred` receives the element of `self` first and is applied in index order.
    /// It need not be symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayview::ArrayView;
    ///
    /// let a = ArrayView::from_array(&[0, 1, 2, 3]);
    /// let b = ArrayView::from_array(&[-2, 0, 1, -2]);
    /// assert!(a.equals_by(&b, |x, y| x > y));
    /// assert!(!a.equals(&b));
    /// ```
    pub fn equals_by<U, F>(&self, other: &ArrayView<'_, U>, mut pred: F) -> bool
    where
        F: FnMut(&T, &U) -> bool,
    {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| pred(a, b))
    }

    /// Returns `true` if `prefix` matches the first elements of the view.
    pub fn starts_with(&self, prefix: &ArrayView<'_, T>) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().starts_with(prefix.as_slice())
    }

    /// Returns `true` if `suffix` matches the last elements of the view.
    pub fn ends_with(&self, suffix: &ArrayView<'_, T>) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().ends_with(suffix.as_slice())
    }

    /// Copies the viewed elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Resets the view to the empty view with a null base.
    pub fn clear(&mut self) -> &mut Self {
        self.slice = None;
        self
    }

    /// Drops the first `n` elements from the view, or all of them if `n` exceeds the length.
    ///
    /// Removing everything leaves an empty view based one past the previous end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayview::ArrayView;
    ///
    /// let data = [0, 1, 2, 3];
    /// let mut view = ArrayView::from_array(&data);
    /// view.remove_prefix(2);
    /// assert_eq!(view.data(), data[2..].as_ptr());
    /// assert_eq!(view.len(), 2);
    /// ```
    pub fn remove_prefix(&mut self, n: usize) -> &mut Self {
        if let Some(slice) = self.slice {
            let n = n.min(slice.len());
            self.slice = Some(&slice[n..]);
        }
        self
    }

    /// Drops the last `n` elements from the view, or all of them if `n` exceeds the length.
    pub fn remove_suffix(&mut self, n: usize) -> &mut Self {
        if let Some(slice) = self.slice {
            let n = n.min(slice.len());
            self.slice = Some(&slice[..slice.len() - n]);
        }
        self
    }

    /// Drops the first element, if any.
    pub fn pop_front(&mut self) -> &mut Self {
        self.remove_prefix(1)
    }

    /// Drops the last element, if any.
    pub fn pop_back(&mut self) -> &mut Self {
        self.remove_suffix(1)
    }

    /// Returns a view of up to `count` elements starting at `offset`.
    ///
    /// The result is truncated at the end of the view and is the empty view if
    /// `offset` is at or past the end.
    #[must_use]
    pub fn substring(&self, offset: usize, count: usize) -> Self {
        self.narrow(clamp_offset(offset, count, self.len()))
    }

    /// Returns a view of the elements in `begin..end`.
    ///
    /// Both ends are clamped to the length; if `begin` is then not before `end`,
    /// the result is the empty view.
    #[must_use]
    pub fn slice(&self, begin: usize, end: usize) -> Self {
        self.narrow(clamp_span(begin, end, self.len()))
    }

    /// Returns a view of the elements selected by `range_bounds`, clamped like [`ArrayView::slice`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayview::ArrayView;
    ///
    /// let view = ArrayView::from_array(&[0, 1, 2, 3]);
    /// assert_eq!(view.range(1..=2), [1, 2]);
    /// assert_eq!(view.range(2..), [2, 3]);
    /// assert_eq!(view.range(..10), [0, 1, 2, 3]);
    /// assert!(view.range(5..).is_empty());
    /// ```
    #[must_use]
    pub fn range<R>(&self, range_bounds: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        self.narrow(clamp_bounds(range_bounds, self.len()))
    }

    /// Splits the view into `0..mid` and `mid..len`, with `mid` clamped to the length.
    #[must_use]
    pub fn split_at(&self, mid: usize) -> (Self, Self) {
        let len = self.len();
        (self.slice(0, mid), self.slice(mid, len))
    }

    fn narrow(&self, range: Range<usize>) -> Self {
        if range.is_empty() {
            Self::empty()
        } else {
            Self::new(&self.as_slice()[range])
        }
    }
}

impl<'a> ArrayView<'a, u8> {
    /// Creates a view over the UTF-8 bytes of `text`, without any terminator.
    pub const fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }

    /// Reads the viewed bytes as text sharing the same storage.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayViewError::InvalidText`] if the bytes are not valid UTF-8.
    pub fn to_text_view(&self) -> ArrayViewResult<&'a str> {
        Ok(core::str::from_utf8(self.as_slice())?)
    }

    /// Copies the viewed bytes into a new `String`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayViewError::InvalidText`] if the bytes are not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayview::ArrayView;
    ///
    /// let text = String::from("test");
    /// let view = ArrayView::from(&text);
    /// assert_eq!(view.to_text().unwrap(), "test");
    /// ```
    pub fn to_text(&self) -> ArrayViewResult<String> {
        self.to_text_view().map(String::from)
    }

    /// Reads the viewed bytes as text, replacing invalid sequences with `U+FFFD`.
    ///
    /// Borrows the storage when the bytes are valid UTF-8.
    pub fn to_text_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.as_slice())
    }
}

impl<T> Clone for ArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayView<'_, T> {}

impl<T> Default for ArrayView<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for ArrayView<'_, T> {
    type Output = T;

    fn index(&self, pos: usize) -> &Self::Output {
        debug_assert!(
            pos < self.len(),
            "ArrayView index {pos} out of range for length {}",
            self.len()
        );
        &self.as_slice()[pos]
    }
}

impl<T> AsRef<[T]> for ArrayView<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, U> PartialEq<ArrayView<'_, U>> for ArrayView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &ArrayView<'_, U>) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for ArrayView<'_, T> {}

impl<T, U> PartialEq<[U]> for ArrayView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for ArrayView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for ArrayView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for ArrayView<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for ArrayView<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

// Hashes like the equivalent slice, so null and dangling empty views agree.
impl<T: Hash> Hash for ArrayView<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T> IntoIterator for ArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &ArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> From<&'a [T]> for ArrayView<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for ArrayView<'a, T> {
    fn from(array: &'a [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<'a, T> From<&'a Vec<T>> for ArrayView<'a, T> {
    fn from(vec: &'a Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<'a> From<&'a str> for ArrayView<'a, u8> {
    fn from(text: &'a str) -> Self {
        Self::from_text(text)
    }
}

impl<'a> From<&'a String> for ArrayView<'a, u8> {
    fn from(text: &'a String) -> Self {
        Self::from_text(text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    const A: [i32; 4] = [0, 1, 2, 3];

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_const_constructors() {
        static DATA: [i32; 4] = [0, 1, 2, 3];
        static X2: ArrayView<'static, i32> = ArrayView::from_array(&DATA);
        const X1: ArrayView<'static, i32> = ArrayView::empty();
        const X3: ArrayView<'static, i32> = ArrayView::new(&[0, 1]);
        const _: () = assert!(X1.is_empty() && X1.len() == 0);
        const _: () = assert!(X3.len() == 2);

        assert!(X1.data().is_null());
        assert_eq!(X2.data(), DATA.as_ptr());
        assert_eq!(X2.len(), 4);
        assert_eq!(X3, [0, 1]);
    }

    #[test]
    fn test_default_is_empty() {
        let view = ArrayView::<i32>::default();
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert!(view.data().is_null());
    }

    #[test]
    fn test_from_raw_parts() {
        let a = [0, 1, 2, 3];
        let view = unsafe { ArrayView::from_raw_parts(a.as_ptr(), 2) };
        assert_eq!(view.data(), a.as_ptr());
        assert_eq!(view.len(), 2);

        let null = unsafe { ArrayView::<i32>::from_raw_parts(ptr::null(), 4) };
        assert!(null.data().is_null());
        assert_eq!(null.len(), 0);
    }

    #[test]
    fn test_copy_shares_storage() {
        let a = [0, 1, 2, 3];
        let x = ArrayView::from_array(&a);
        let mut y = x;
        y.pop_front();
        assert_eq!(x.data(), a.as_ptr());
        assert_eq!(x.len(), 4);
        assert_eq!(y.data(), a[1..].as_ptr());
    }

    #[test]
    fn test_container_constructors() {
        let a = [0, 1, 2, 3];
        let b = vec![0, 1, 2, 3];
        let c = String::from("Test");
        let d: &str = &c;

        let x0 = ArrayView::from(&a);
        let x1 = ArrayView::from(&b);
        let x2 = ArrayView::from(&c);
        let x3 = ArrayView::from(d);
        let x4 = ArrayView::from_vec(&b);

        assert_eq!((x0.data(), x0.len()), (a.as_ptr(), a.len()));
        assert_eq!((x1.data(), x1.len()), (b.as_ptr(), b.len()));
        assert_eq!((x2.data(), x2.len()), (c.as_ptr(), c.len()));
        assert_eq!((x3.data(), x3.len()), (d.as_ptr(), d.len()));
        assert_eq!(x4, x1);
    }

    #[test]
    fn test_operators() {
        let b = [0, 1, 2];
        let x0 = ArrayView::from_array(&A);
        let x1 = ArrayView::from_array(&b);
        let x2 = ArrayView::new(&A[..3]);

        assert!(x0 == x0);
        assert!(x0 != x1);
        assert!(x0 != x2);
        assert!(x1 == x1);
        assert!(x1 == x2);
        assert!(x2 == x2);

        assert_eq!(x0[0], 0);
        assert_eq!(x0[3], 3);
        assert_eq!(x1[2], 2);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let x = ArrayView::from_array(&A);
        let _ = x[4];
    }

    #[test]
    fn test_empty_views_of_any_origin_are_equal() {
        let a = [0, 1, 2, 3];
        let mut drained = ArrayView::from_array(&a);
        drained.remove_prefix(10);
        let empty_vec: Vec<i32> = Vec::new();

        assert_eq!(ArrayView::<i32>::empty(), drained);
        assert_eq!(ArrayView::from_vec(&empty_vec), drained);
        assert_eq!(hash_of(&ArrayView::<i32>::empty()), hash_of(&drained));
    }

    #[test]
    fn test_iteration() {
        let x = ArrayView::from_array(&A);
        assert_eq!(x.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(x.iter_rev().copied().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        // Restartable.
        assert_eq!(x.iter().count(), 4);
        assert_eq!((&x).into_iter().sum::<i32>(), 6);
        assert_eq!(x.into_iter().next(), Some(&0));
        assert_eq!(ArrayView::<i32>::empty().iter().next(), None);
    }

    #[test]
    fn test_container_queries() {
        let x0 = ArrayView::from_array(&A);
        let x1 = ArrayView::<i32>::empty();
        assert!(!x0.is_empty());
        assert!(x1.is_empty());
        assert_eq!(x0.as_slice(), &A);
        assert!(x1.as_slice().is_empty());
    }

    #[test]
    fn test_access() {
        let x0 = ArrayView::from_array(&A);
        let x1 = ArrayView::<i32>::empty();

        assert_eq!(x0.front(), Some(&0));
        assert_eq!(x0.back(), Some(&3));
        assert_eq!(x1.front(), None);
        assert_eq!(x1.back(), None);

        for i in 0..4 {
            assert_eq!(x0.at(i), Ok(&x0[i]));
            assert_eq!(unsafe { x0.get_unchecked(i) }, &x0[i]);
        }
        assert_eq!(
            x0.at(4),
            Err(ArrayViewError::OutOfRange { pos: 4, len: 4 })
        );
        assert!(matches!(
            x1.at(0),
            Err(ArrayViewError::OutOfRange { pos: 0, len: 0 })
        ));
        assert_eq!(x0.get(4), None);
    }

    #[test]
    fn test_equals() {
        let b = [0, 1, 2, 3];
        let c = [-2, 0, 1, -2];
        let x0 = ArrayView::from_array(&A);
        let x1 = ArrayView::from_array(&b);
        let x2 = ArrayView::from_array(&c);

        assert!(x0.equals(&x1));
        assert!(!x0.equals(&x2));
        assert!(!x0.equals_by(&x1, |a, b| a > b));
        assert!(x0.equals_by(&x2, |a, b| a > b));
    }

    #[test]
    fn test_equals_by_applies_in_order() {
        let x0 = ArrayView::from_array(&A);
        let mut seen = Vec::new();
        assert!(x0.equals_by(&x0, |a, b| {
            seen.push((*a, *b));
            true
        }));
        assert_eq!(seen, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);

        let shorter = x0.substring(0, 3);
        assert!(!x0.equals_by(&shorter, |_, _| true));
    }

    #[test]
    fn test_equals_across_element_types() {
        let words = ["a", "b"];
        let owned = [String::from("a"), String::from("b")];
        let x0 = ArrayView::from_array(&owned);
        let x1 = ArrayView::from_array(&words);
        assert!(x0.equals(&x1));
        assert!(x0.equals_by(&x1, |s, t| s.len() == t.len()));
    }

    #[test]
    fn test_ordering() {
        let b = [0, 1, 3];
        let x0 = ArrayView::from_array(&A);
        let x1 = ArrayView::from_array(&b);
        assert!(x0 < x1);
        assert_eq!(x0.cmp(&x0), Ordering::Equal);
        assert!(ArrayView::<i32>::empty() < x0);
    }

    #[test]
    fn test_starts_and_ends_with() {
        let x0 = ArrayView::from_array(&A);
        assert!(x0.starts_with(&x0.substring(0, 2)));
        assert!(x0.ends_with(&x0.slice(2, 4)));
        assert!(x0.starts_with(&ArrayView::empty()));
        assert!(!x0.ends_with(&x0.substring(0, 2)));
    }

    #[test]
    fn test_conversion() {
        let b = vec![0, 1, 2, 3];
        let c = String::from("test");
        let x0 = ArrayView::from_array(&A);
        let x1 = ArrayView::from(&c);

        assert_eq!(x0.to_vec(), b);
        assert_eq!(x1.to_text().unwrap(), "test");
        let text_view = x1.to_text_view().unwrap();
        assert_eq!(text_view, "test");
        assert_eq!(text_view.as_ptr(), c.as_ptr());
        assert!(matches!(x1.to_text_lossy(), Cow::Borrowed("test")));
    }

    #[test]
    fn test_to_vec_is_independent() {
        let mut a = [0, 1, 2, 3];
        let mut copy = ArrayView::from_array(&a).to_vec();
        copy[0] = 10;
        assert_eq!(a, [0, 1, 2, 3]);
        a[1] = 20;
        assert_eq!(copy, vec![10, 1, 2, 3]);
        assert_eq!(a, [0, 20, 2, 3]);
    }

    #[test]
    fn test_invalid_text() {
        let bytes = [b't', 0xff, b't'];
        let x = ArrayView::from_array(&bytes);
        assert!(matches!(x.to_text(), Err(ArrayViewError::InvalidText(_))));
        assert!(matches!(
            x.to_text_view(),
            Err(ArrayViewError::InvalidText(_))
        ));
        assert_eq!(x.to_text_lossy(), "t\u{FFFD}t");
    }

    #[test]
    fn test_clear() {
        let mut x = ArrayView::from_array(&A);
        x.clear();
        assert!(x.data().is_null());
        assert_eq!(x.len(), 0);
        x.clear();
        assert!(x.data().is_null());
        assert_eq!(x.len(), 0);
    }

    #[test]
    fn test_remove_prefix() {
        let a = [0, 1, 2, 3];
        let mut x = ArrayView::from_array(&a);
        x.remove_prefix(2);
        assert_eq!(x.data(), a[2..].as_ptr());
        assert_eq!(x.len(), 2);
    }

    #[test]
    fn test_remove_prefix_clamps_past_end() {
        let a = [0, 1, 2, 3];
        let mut x = ArrayView::from_array(&a);
        x.remove_prefix(8);
        assert!(x.is_empty());
        assert_eq!(x.data(), a.as_ptr().wrapping_add(4));
    }

    #[test]
    fn test_remove_suffix() {
        let a = [0, 1, 2, 3];
        let mut x = ArrayView::from_array(&a);
        x.remove_suffix(2);
        assert_eq!(x.data(), a.as_ptr());
        assert_eq!(x.len(), 2);
        x.remove_suffix(8);
        assert_eq!(x.data(), a.as_ptr());
        assert!(x.is_empty());
    }

    #[test]
    fn test_pop_front() {
        let a = [0, 1, 2, 3];
        let mut x = ArrayView::from_array(&a);
        x.pop_front();
        assert_eq!(x.data(), a[1..].as_ptr());
        assert_eq!(x.len(), 3);
    }

    #[test]
    fn test_pop_back() {
        let a = [0, 1, 2, 3];
        let mut x = ArrayView::from_array(&a);
        x.pop_back();
        assert_eq!(x.data(), a.as_ptr());
        assert_eq!(x.len(), 3);
    }

    #[test]
    fn test_chained_mutators() {
        let a = [0, 1, 2, 3, 4, 5];
        let mut x = ArrayView::from_array(&a);
        x.pop_front().pop_back().remove_prefix(1).remove_suffix(1);
        assert_eq!(x, [2, 3]);
    }

    #[test]
    fn test_mutators_on_empty_view() {
        let mut x = ArrayView::<i32>::empty();
        x.remove_prefix(3).remove_suffix(3).pop_front().pop_back();
        assert!(x.is_empty());
        assert!(x.data().is_null());
    }

    #[test]
    fn test_substring() {
        let a = [0, 1, 2, 3];
        let x0 = ArrayView::from_array(&a);
        let x1 = x0.substring(1, 2);
        let x2 = x0.substring(5, 2);
        let x3 = x0.substring(1, 8);

        assert_eq!(x1.data(), a[1..].as_ptr());
        assert_eq!(x1.len(), 2);
        assert_eq!(x1, [1, 2]);

        assert!(x2.is_empty());

        assert_eq!(x3.data(), a[1..].as_ptr());
        assert_eq!(x3.len(), 3);
        assert_eq!(x0.len(), 4);
    }

    #[test]
    fn test_slice() {
        let a = [0, 1, 2, 3];
        let x0 = ArrayView::from_array(&a);
        let x1 = x0.slice(1, 3);
        let x2 = x0.slice(5, 2);
        let x3 = x0.slice(1, 8);

        assert_eq!(x1.data(), a[1..].as_ptr());
        assert_eq!(x1.len(), 2);

        assert!(x2.is_empty());
        assert!(x0.slice(3, 1).is_empty());

        assert_eq!(x3.data(), a[1..].as_ptr());
        assert_eq!(x3.len(), 3);
    }

    #[test]
    fn test_range_and_split_at() {
        let x0 = ArrayView::from_array(&A);
        assert_eq!(x0.range(..), x0);
        assert_eq!(x0.range(1..3), x0.slice(1, 3));
        let (hi, lo) = (3, 1);
        assert!(x0.range(hi..lo).is_empty());

        let (left, right) = x0.split_at(1);
        assert_eq!(left, [0]);
        assert_eq!(right, [1, 2, 3]);
        let (left, right) = x0.split_at(9);
        assert_eq!(left, x0);
        assert!(right.is_empty());
    }

    #[test]
    fn test_debug_format() {
        let x0 = ArrayView::from_array(&A);
        assert_eq!(format!("{x0:?}"), "[0, 1, 2, 3]");
        assert_eq!(format!("{:?}", ArrayView::<i32>::empty()), "[]");
    }
}
