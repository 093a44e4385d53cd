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

//! Queue operations over possibly absent arguments.
//!
//! Drivers that track queues as optional handles can call these functions
//! directly instead of matching on every argument themselves. An absent
//! queue makes the query and reordering operations no-ops, while the
//! inserting and removing operations report an error.
//!
//! ```
//! use strqueue::{handle, QueueError};
//!
//! let mut queue = Some(handle::create()?);
//! handle::insert_tail(queue.as_deref_mut(), Some("b"))?;
//! handle::insert_head(queue.as_deref_mut(), Some("a"))?;
//! assert_eq!(handle::size(queue.as_deref()), 2);
//!
//! handle::destroy(queue.take());
//! assert_eq!(handle::size(queue.as_deref()), 0);
//! assert_eq!(
//!     handle::remove_head(queue.as_deref_mut(), None),
//!     Err(QueueError::EmptyQueue),
//! );
//! # Ok::<(), QueueError>(())
//! ```

use crate::{boxed::try_box_with, Queue, QueueError, Removed, Result};
use alloc::boxed::Box;

/// Allocates a new empty queue handle.
pub fn create() -> Result<Box<Queue>> {
    try_box_with(|| Ok(Queue::new()))
}

/// Releases the queue and every value it holds. Absent queues are ignored.
pub fn destroy(queue: Option<Box<Queue>>) {
    drop(queue);
}

/// Copies `value` to the head of the queue. Absent arguments are rejected.
pub fn insert_head(queue: Option<&mut Queue>, value: Option<&str>) -> Result<()> {
    let (queue, value) = require(queue, value)?;
    queue.insert_head(value)
}

/// Copies `value` to the tail of the queue. Absent arguments are rejected.
pub fn insert_tail(queue: Option<&mut Queue>, value: Option<&str>) -> Result<()> {
    let (queue, value) = require(queue, value)?;
    queue.insert_tail(value)
}

/// Removes the head of the queue. See [`Queue::remove_head`] for how `buf`
/// is filled. An absent queue is reported as [`QueueError::EmptyQueue`].
pub fn remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Result<Removed> {
    queue
        .ok_or(QueueError::EmptyQueue)
        .and_then(|queue| queue.remove_head(buf))
}

/// Returns the number of elements, or 0 for an absent queue.
pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::len)
}

/// Reverses the queue in place. Does nothing for an absent queue.
pub fn reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

/// Sorts the queue in ascending order. Does nothing for an absent queue.
pub fn sort(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}

fn require<'a, 'b>(
    queue: Option<&'a mut Queue>,
    value: Option<&'b str>,
) -> Result<(&'a mut Queue, &'b str)> {
    let reason = match (queue, value) {
        (Some(queue), Some(value)) => return Ok((queue, value)),
        (None, None) => "queue and value are absent",
        (None, Some(_)) => "queue is absent",
        (Some(_), None) => "value is absent",
    };

    tracing::debug!(reason, "rejected insert");
    Err(QueueError::InvalidArgument(reason))
}
