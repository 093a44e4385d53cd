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

//! A singly linked queue of owned strings.
//!
//! [`Queue`] keeps an owning chain of elements rooted at its head together
//! with a non-owning pointer to its tail, which gives O(1) insertion at both
//! ends and O(1) removal at the head. [`Queue::reverse`] and [`Queue::sort`]
//! only relink the existing elements: neither allocates nodes nor copies the
//! stored strings.
//!
//! The [`handle`] module exposes the same operations over optional queue and
//! string arguments for drivers that deal in absent values.
//!
//! ```
//! use strqueue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("banana")?;
//! queue.insert_tail("cherry")?;
//! queue.insert_head("apple")?;
//!
//! queue.reverse();
//! assert_eq!(queue.front(), Some("cherry"));
//!
//! queue.sort();
//! let mut buf = [0u8; 8];
//! let removed = queue.remove_head(Some(&mut buf[..]))?;
//! assert_eq!(&buf[..removed.copied], b"apple");
//! assert_eq!(queue.len(), 2);
//! # Ok::<(), strqueue::QueueError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(
    rust_2018_idioms,
    unreachable_pub,
    missing_debug_implementations
    // missing_docs
)]

extern crate alloc;

mod boxed;
mod element;
mod error;
pub mod handle;
mod queue;
mod sort;

pub use self::{
    error::{QueueError, Result},
    queue::{IntoIter, Iter, Queue, Removed},
};
