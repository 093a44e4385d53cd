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

use crate::{QueueError, Result};
use alloc::{
    alloc::{alloc, dealloc, Layout},
    boxed::Box,
};
use core::ptr::NonNull;

/// Allocates the memory for a `Box<T>` before `init` produces its value.
///
/// `Box::new` aborts when the allocator fails. This reports the failure
/// instead, and if `init` itself fails the raw memory is released again so
/// nothing observable happened.
pub(crate) fn try_box_with<T>(init: impl FnOnce() -> Result<T>) -> Result<Box<T>> {
    let layout = Layout::new::<T>();
    debug_assert_ne!(layout.size(), 0, "try_box_with on a zero sized type");

    // SAFETY: the layout has a non-zero size
    let ptr = unsafe { alloc(layout) }.cast::<T>();
    let ptr = NonNull::new(ptr).ok_or_else(|| {
        tracing::debug!(bytes = layout.size(), "box allocation failed");
        QueueError::Allocation {
            bytes: layout.size(),
        }
    })?;

    match init() {
        // SAFETY: ptr was allocated by the global allocator with T's layout,
        // which is exactly what Box::from_raw expects to own.
        Ok(value) => unsafe {
            ptr.as_ptr().write(value);
            Ok(Box::from_raw(ptr.as_ptr()))
        },
        Err(err) => {
            // SAFETY: nothing was written to ptr, so only the memory is released.
            unsafe { dealloc(ptr.as_ptr().cast(), layout) };
            Err(err)
        }
    }
}
