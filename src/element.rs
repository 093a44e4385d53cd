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

use crate::{boxed::try_box_with, QueueError, Result};
use alloc::{boxed::Box, string::String};
use core::ptr::NonNull;

/// Link to an element allocated by [`Element::try_new`].
/// Ownership is tracked by the queue the element is linked into.
pub(crate) type Link = Option<NonNull<Element>>;

/// A node of the queue: one owned value and a link to its successor.
pub(crate) struct Element {
    pub(crate) value: String,
    pub(crate) next: Link,
}

impl Element {
    /// Allocates a detached element holding an independent copy of `value`.
    ///
    /// The node is allocated before the value buffer. If the buffer can't be
    /// allocated the node is released again before the error is returned.
    ///
    /// The returned pointer owns the element until it is passed to
    /// [`Element::release`].
    pub(crate) fn try_new(value: &str) -> Result<NonNull<Self>> {
        let element = try_box_with(|| {
            let mut copy = String::new();
            copy.try_reserve_exact(value.len()).map_err(|_| {
                tracing::debug!(bytes = value.len(), "value allocation failed");
                QueueError::Allocation { bytes: value.len() }
            })?;

            copy.push_str(value);
            Ok(Self {
                value: copy,
                next: None,
            })
        })?;

        // SAFETY: Box::into_raw never returns null.
        Ok(unsafe { NonNull::new_unchecked(Box::into_raw(element)) })
    }

    /// Takes back ownership of an element created by [`Element::try_new`].
    ///
    /// # Safety
    ///
    /// `element` must come from `try_new`, must not be linked anywhere
    /// anymore and must not be released twice.
    pub(crate) unsafe fn release(element: NonNull<Self>) -> Box<Self> {
        Box::from_raw(element.as_ptr())
    }
}
