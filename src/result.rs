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

//! Error types and results for the ArrayView library.

use core::str::Utf8Error;
use thiserror::Error;

/// A specialized Result type for ArrayView operations.
pub type ArrayViewResult<T> = Result<T, ArrayViewError>;

/// Errors that can occur during ArrayView operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayViewError {
    /// The requested position lies outside the view.
    #[error("position {pos} is out of range for view of length {len}")]
    OutOfRange {
        /// Requested position.
        pos: usize,
        /// Length of the view at the time of the request.
        len: usize,
    },
    /// The viewed bytes are not valid UTF-8 and cannot be read as text.
    #[error("view does not contain valid UTF-8 text: {0}")]
    InvalidText(#[from] Utf8Error),
}
