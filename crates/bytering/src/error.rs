// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

/// Failure kinds for ring buffer operations.
///
/// Every operation either fully succeeds or returns one of these with no
/// partial mutation of cursors or storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// Zero capacity at construction/reset, or a read/write run longer than
    /// the buffer's capacity.
    InvalidArgument,
    /// Storage allocation failed at construction/reset.
    AllocationError,
    /// `pop` called with no unread bytes buffered.
    BufferEmpty,
    /// `read` requested more bytes than are currently buffered.
    BufferUnderrun,
}

impl RingError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::AllocationError => "ALLOCATION_ERROR",
            Self::BufferEmpty => "BUFFER_EMPTY",
            Self::BufferUnderrun => "BUFFER_UNDERRUN",
        }
    }
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for RingError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
