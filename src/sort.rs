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

//! Merge sort over the links of a [`Queue`].
//!
//! Splitting, merging and splicing only move the boxes that make up the
//! chain, so sorting neither allocates elements nor copies their values.

use crate::Queue;

impl Queue {
    /// Sorts the queue in ascending byte-wise order of its values.
    ///
    /// The sort is stable: equal values keep their relative order. It takes
    /// O(n log n) comparisons and recurses O(log n) deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// for fruit in ["banana", "apple", "cherry"].iter() {
    ///     queue.insert_tail(fruit)?;
    /// }
    ///
    /// queue.sort();
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), ["apple", "banana", "cherry"]);
    /// # Ok::<(), strqueue::QueueError>(())
    /// ```
    pub fn sort(&mut self) {
        if self.len() <= 1 {
            return;
        }

        tracing::trace!(len = self.len(), "sorting queue");
        merge_sort(self);
    }
}

fn merge_sort(queue: &mut Queue) {
    if queue.len() <= 1 {
        return;
    }

    let mut back = queue.split_half();
    merge_sort(queue);
    merge_sort(&mut back);

    let front = core::mem::take(queue);
    *queue = merge(front, back);
}

/// Merges two sorted queues, taking from `front` on ties.
fn merge(mut front: Queue, mut back: Queue) -> Queue {
    let mut merged = Queue::new();

    while let (Some(left), Some(right)) = (front.front(), back.front()) {
        let source = if in_order(left, right) {
            &mut front
        } else {
            &mut back
        };

        let element = source.unlink_head().expect("sorted run lost its head");
        merged.link_tail(element);
    }

    // At most one of them still holds elements.
    merged.append(&mut front);
    merged.append(&mut back);
    merged
}

#[inline]
fn in_order(left: &str, right: &str) -> bool {
    left.as_bytes() <= right.as_bytes()
}
