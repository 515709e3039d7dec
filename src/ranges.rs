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

//! Clamping of offsets, counts and range bounds against a view length.
//!
//! Every function here maps arbitrary caller input onto a half-open range that
//! lies inside `0..len`. None of them fail; an empty result has `start == end`.

use core::ops::{Bound, Range, RangeBounds};

/// Resolves `offset` and `count` into the range a substring covers.
///
/// Starts at `offset` and spans up to `count` elements, truncated at `len`.
/// Returns `len..len` if `offset` is at or past the end.
pub(crate) fn clamp_offset(offset: usize, count: usize, len: usize) -> Range<usize> {
    if offset >= len {
        return len..len;
    }
    let count = count.min(len - offset);
    offset..offset + count
}

/// Resolves `begin` and `end` into the range a slice covers.
///
/// Both ends are clamped to `len`. If `begin` ends up at or past `end` the
/// range collapses to `end..end`.
pub(crate) fn clamp_span(begin: usize, end: usize, len: usize) -> Range<usize> {
    let end = end.min(len);
    let begin = begin.min(end);
    begin..end
}

/// Resolves any `RangeBounds` into a clamped range over `0..len`.
pub(crate) fn clamp_bounds<R>(range_bounds: R, len: usize) -> Range<usize>
where
    R: RangeBounds<usize>,
{
    let start = match range_bounds.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range_bounds.end_bound() {
        Bound::Included(&n) => n.saturating_add(1),
        Bound::Excluded(&n) => n,
        Bound::Unbounded => len,
    };
    clamp_span(start, end, len)
}
