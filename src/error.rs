// Copyright (c) 2020 kprotty
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Errors reported by the queue operations.
///
/// Every error is recoverable: a mutating operation that fails leaves the
/// queue exactly as it was before the call.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum QueueError {
    /// The allocator could not provide memory for a queue, an element or
    /// the copy of an element's value.
    #[error("failed to allocate {bytes} bytes")]
    Allocation { bytes: usize },

    /// A queue or value argument was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Removal was attempted on an empty or absent queue.
    #[error("queue is empty")]
    EmptyQueue,
}

/// Result type for queue operations.
pub type Result<T> = core::result::Result<T, QueueError>;
