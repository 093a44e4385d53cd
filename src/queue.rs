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

use crate::{
    element::{Element, Link},
    QueueError, Result,
};
use alloc::{boxed::Box, string::String};
use core::{fmt, iter::FusedIterator, marker::PhantomData, mem, ptr::NonNull};

/// A FIFO queue of owned strings backed by a singly linked list.
///
/// The queue owns a chain of elements starting at its head. It also keeps a
/// pointer to the last element so that [`insert_tail`] runs in O(1) without
/// walking the chain.
///
/// Every inserted string is copied into a buffer owned by the queue, so the
/// caller keeps ownership of what it passed in. Allocation failures are
/// reported through [`QueueError::Allocation`] instead of aborting, and a
/// failed insert leaves the queue untouched.
///
/// # Examples
///
/// ```
/// use strqueue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_head("b")?;
/// queue.insert_head("a")?;
/// queue.insert_tail("c")?;
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
///
/// assert_eq!(queue.pop_head().as_deref(), Some("a"));
/// assert_eq!(queue.back(), Some("c"));
/// # Ok::<(), strqueue::QueueError>(())
/// ```
///
/// [`insert_tail`]: Queue::insert_tail
pub struct Queue {
    /// First element of the chain. Every element reachable from here is
    /// owned by the queue and released through [`Element::release`].
    head: Link,
    /// Last element of the chain, or `None` when empty.
    tail: Link,
    size: usize,
    _owns: PhantomData<Box<Element>>,
}

// SAFETY: the queue exclusively owns every element it links to and only
// hands out shared references through &self.
unsafe impl Send for Queue {}
unsafe impl Sync for Queue {}

/// Outcome of a successful [`Queue::remove_head`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Removed {
    /// Number of bytes of the removed value written into the buffer,
    /// excluding the terminating `0`.
    pub copied: usize,
    /// Whether the removed value was longer than what was written.
    pub truncated: bool,
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Queue {
    /// Creates an empty queue. An empty queue owns no heap memory.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
            _owns: PhantomData,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the value at the head of the queue.
    pub fn front(&self) -> Option<&str> {
        // SAFETY: head is owned by self and outlives the shared borrow.
        self.head
            .map(|head| unsafe { &*head.as_ptr() })
            .map(|element| element.value.as_str())
    }

    /// Returns the value at the tail of the queue without walking the chain.
    pub fn back(&self) -> Option<&str> {
        // SAFETY: tail is owned by self and outlives the shared borrow.
        self.tail
            .map(|tail| unsafe { &*tail.as_ptr() })
            .map(|element| element.value.as_str())
    }

    /// Copies `value` into a new element which becomes the head of the queue.
    ///
    /// Fails with [`QueueError::Allocation`] if either the element or the
    /// copy of `value` could not be allocated, in which case the queue is
    /// left unmodified.
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        let element = Element::try_new(value)?;
        self.link_head(element);
        Ok(())
    }

    /// Copies `value` into a new element which becomes the tail of the queue.
    ///
    /// Runs in O(1) and has the same failure behavior as [`insert_head`].
    ///
    /// [`insert_head`]: Queue::insert_head
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        let element = Element::try_new(value)?;
        self.link_tail(element);
        Ok(())
    }

    /// Removes the head of the queue, optionally copying its value out.
    ///
    /// When `buf` is provided, at most `buf.len() - 1` bytes of the removed
    /// value are copied into it, followed by a `0` terminator. Longer values
    /// are truncated and [`Removed::truncated`] is set. A zero length buffer
    /// receives nothing at all.
    ///
    /// Fails with [`QueueError::EmptyQueue`] without modifying anything if
    /// the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::{Queue, QueueError};
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("truncated")?;
    ///
    /// let mut buf = [0xffu8; 6];
    /// let removed = queue.remove_head(Some(&mut buf[..]))?;
    /// assert_eq!(&buf, b"trunc\0");
    /// assert!(removed.truncated);
    ///
    /// assert_eq!(queue.remove_head(None), Err(QueueError::EmptyQueue));
    /// # Ok::<(), QueueError>(())
    /// ```
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<Removed> {
        let element = self.pop_element().ok_or(QueueError::EmptyQueue)?;
        let value = element.value.as_bytes();

        let removed = match buf {
            None => Removed::default(),
            Some(buf) => match buf.len().checked_sub(1) {
                None => Removed {
                    copied: 0,
                    truncated: !value.is_empty(),
                },
                Some(capacity) => {
                    let copied = value.len().min(capacity);
                    buf[..copied].copy_from_slice(&value[..copied]);
                    buf[copied] = 0;
                    Removed {
                        copied,
                        truncated: copied < value.len(),
                    }
                }
            },
        };

        Ok(removed)
    }

    /// Removes the head of the queue and returns its value without copying.
    pub fn pop_head(&mut self) -> Option<String> {
        self.pop_element().map(|element| element.value)
    }

    /// Reverses the order of the elements in place.
    ///
    /// Every link is flipped in a single pass. No element is allocated or
    /// released and no value is copied.
    pub fn reverse(&mut self) {
        if self.size <= 1 {
            return;
        }

        tracing::trace!(len = self.size, "reversing queue");

        let mut reversed: Link = None;
        let mut current = self.head;
        while let Some(element) = current {
            // SAFETY: every element in the chain is owned by self.
            unsafe {
                let element = &mut *element.as_ptr();
                current = mem::replace(&mut element.next, reversed);
            }
            reversed = Some(element);
        }

        self.tail = self.head;
        self.head = reversed;
    }

    /// Releases every element, leaving the queue empty and reusable.
    pub fn clear(&mut self) {
        if self.size > 0 {
            tracing::trace!(len = self.size, "releasing queue elements");
        }

        self.tail = None;
        self.size = 0;

        let mut current = self.head.take();
        while let Some(element) = current {
            // SAFETY: the chain was detached from self above, so each
            // element is released exactly once.
            let element = unsafe { Element::release(element) };
            current = element.next;
        }
    }

    /// Returns an iterator over the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head,
            remaining: self.size,
            _queue: PhantomData,
        }
    }

    fn link_head(&mut self, element: NonNull<Element>) {
        // SAFETY: the caller hands over ownership of a detached element.
        unsafe { (*element.as_ptr()).next = self.head };
        if self.tail.is_none() {
            self.tail = Some(element);
        }

        self.head = Some(element);
        self.size += 1;
    }

    /// Links a detached element after the tail, taking ownership of it.
    pub(crate) fn link_tail(&mut self, element: NonNull<Element>) {
        // SAFETY: the caller hands over ownership of a detached element and
        // tail is owned by self.
        unsafe {
            debug_assert!((*element.as_ptr()).next.is_none());
            match self.tail {
                None => self.head = Some(element),
                Some(tail) => (*tail.as_ptr()).next = Some(element),
            }
        }

        self.tail = Some(element);
        self.size += 1;
    }

    /// Detaches the head. The caller becomes responsible for the element.
    pub(crate) fn unlink_head(&mut self) -> Option<NonNull<Element>> {
        let head = self.head?;
        // SAFETY: head is owned by self.
        self.head = unsafe { (*head.as_ptr()).next.take() };
        self.size -= 1;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(head)
    }

    fn pop_element(&mut self) -> Option<Box<Element>> {
        // SAFETY: the element was just detached, so nothing else links to it.
        self.unlink_head()
            .map(|element| unsafe { Element::release(element) })
    }

    /// Moves every element of `other` to the end of `self` in O(1).
    pub(crate) fn append(&mut self, other: &mut Self) {
        let head = match other.head.take() {
            Some(head) => head,
            None => return,
        };

        match self.tail {
            None => self.head = Some(head),
            // SAFETY: tail is owned by self.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(head) },
        }

        self.tail = other.tail.take();
        self.size += mem::replace(&mut other.size, 0);
    }

    /// Splits off the back half of the queue.
    ///
    /// `self` keeps the first `len / 2` elements and the returned queue gets
    /// the rest, so the back half holds the extra element when `len` is odd.
    /// Both halves are complete queues over disjoint elements.
    pub(crate) fn split_half(&mut self) -> Self {
        let keep = self.size >> 1;
        if keep == 0 {
            return mem::take(self);
        }

        let mut cut = self.head.expect("non-empty queue without a head");
        for _ in 1..keep {
            // SAFETY: cut is one of the first `keep` elements owned by self.
            cut = unsafe { (*cut.as_ptr()).next }.expect("queue chain shorter than its size");
        }

        let back = Self {
            // SAFETY: cut is owned by self.
            head: unsafe { (*cut.as_ptr()).next.take() },
            tail: self.tail,
            size: self.size - keep,
            _owns: PhantomData,
        };

        self.tail = Some(cut);
        self.size = keep;
        back
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Queue {}

/// Iterator over the values of a [`Queue`], from head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    next: Link,
    remaining: usize,
    _queue: PhantomData<&'a Queue>,
}

// SAFETY: Iter only reads through a shared borrow of a Sync queue.
unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the queue is borrowed for 'a, so its elements stay alive.
        let element: &'a Element = unsafe { &*self.next?.as_ptr() };
        self.next = element.next;
        self.remaining -= 1;
        Some(element.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`Queue`] from head to tail.
#[derive(Debug)]
pub struct IntoIter {
    queue: Queue,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntoIterator for Queue {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}
