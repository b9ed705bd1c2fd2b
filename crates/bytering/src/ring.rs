// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-capacity circular byte buffer.
//!
//! Read and write positions are monotone logical cursors counting every byte
//! ever consumed or produced; they are never wrapped themselves. The physical
//! storage offset for a cursor is `cursor % capacity`, and the number of
//! buffered-but-unread bytes is always `write_cursor - read_cursor`, so there
//! is no separate occupancy bookkeeping and no empty/full ambiguity.
//!
//! When a write would exceed capacity the buffer evicts the oldest unread
//! bytes by advancing the read cursor, keeping `write - read <= capacity`.
//! Draining operations never fabricate data: popping an empty buffer or
//! reading past the write cursor is an error, not an empty result.

use tracing::{debug, trace};

use crate::error::RingError;

/// Fixed-capacity circular buffer over raw bytes.
///
/// Writes wrap around the underlying storage once the write cursor passes the
/// allocated capacity. A full buffer overwrites oldest-first: `push` and
/// `write` advance the read cursor over however many unread bytes they
/// displace, so the surviving contents are always the most recent
/// `capacity` bytes in FIFO order.
///
/// The buffer is single-threaded — no internal synchronization, no blocking.
/// Callers sharing one across threads must serialize every operation
/// externally.
#[derive(Debug)]
pub struct RingBuffer {
    buf: Vec<u8>,
    capacity: usize,
    read_cursor: u64,
    write_cursor: u64,
}

/// Allocate a zero-filled storage region, surfacing allocator failure as an
/// error.
fn alloc_storage(capacity: usize) -> Result<Vec<u8>, RingError> {
    if capacity == 0 {
        return Err(RingError::InvalidArgument);
    }
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity).map_err(|_| RingError::AllocationError)?;
    buf.resize(capacity, 0);
    Ok(buf)
}

impl RingBuffer {
    /// Create a new ring buffer with the given capacity in bytes.
    ///
    /// Fails with `InvalidArgument` for a zero capacity and with
    /// `AllocationError` when the allocator cannot satisfy the request.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        let buf = alloc_storage(capacity)?;
        trace!(capacity, "allocated ring buffer");
        Ok(Self { buf, capacity, read_cursor: 0, write_cursor: 0 })
    }

    /// Re-initialize the buffer, discarding any buffered content.
    ///
    /// Storage is reallocated only when the capacity actually changes;
    /// otherwise the existing region is reused. Both cursors are zeroed on
    /// success. On failure (`InvalidArgument` for zero capacity,
    /// `AllocationError` when the replacement region cannot be allocated)
    /// the buffer keeps its previous storage, capacity, and cursors.
    pub fn reset(&mut self, capacity: usize) -> Result<(), RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidArgument);
        }
        if capacity != self.capacity {
            // Allocate the replacement before touching anything so a failed
            // reset leaves the old state fully intact.
            self.buf = alloc_storage(capacity)?;
            debug!(old = self.capacity, new = capacity, "ring buffer reallocated");
            self.capacity = capacity;
        }
        self.read_cursor = 0;
        self.write_cursor = 0;
        Ok(())
    }

    /// Discard all buffered content, keeping capacity and storage.
    pub fn clear(&mut self) {
        self.read_cursor = 0;
        self.write_cursor = 0;
    }

    /// Append a single byte.
    ///
    /// On a full buffer the oldest unread byte is evicted first, so this
    /// never fails and occupancy never exceeds capacity.
    pub fn push(&mut self, byte: u8) {
        if self.is_full() {
            self.read_cursor += 1;
            trace!("ring buffer full, evicting oldest unread byte");
        }
        let at = self.offset(self.write_cursor);
        self.buf[at] = byte;
        self.write_cursor += 1;
    }

    /// Remove and return the oldest unread byte.
    ///
    /// Fails with `BufferEmpty` when nothing is buffered — an empty buffer is
    /// an error condition here, never a silent empty result.
    pub fn pop(&mut self) -> Result<u8, RingError> {
        if self.is_empty() {
            return Err(RingError::BufferEmpty);
        }
        let byte = self.buf[self.offset(self.read_cursor)];
        self.read_cursor += 1;
        Ok(byte)
    }

    /// Append a run of bytes, wrapping around the end of storage.
    ///
    /// A run longer than the capacity can never be represented and fails with
    /// `InvalidArgument` before any mutation. Otherwise the whole run is
    /// accepted atomically: however many oldest unread bytes it displaces are
    /// evicted in one step, then the run is copied in at most two contiguous
    /// legs (tail of storage, then head) and the write cursor advances by the
    /// run length. An empty run is a successful no-op.
    pub fn write(&mut self, data: &[u8]) -> Result<(), RingError> {
        if data.len() > self.capacity {
            return Err(RingError::InvalidArgument);
        }

        let evicted = (self.len() + data.len()).saturating_sub(self.capacity);
        if evicted > 0 {
            self.read_cursor += evicted as u64;
            trace!(evicted, "ring buffer full, evicting oldest unread bytes");
        }

        let start = self.offset(self.write_cursor);
        let end = start + data.len();
        if end <= self.capacity {
            self.buf[start..end].copy_from_slice(data);
        } else {
            let first = self.capacity - start;
            self.buf[start..self.capacity].copy_from_slice(&data[..first]);
            self.buf[..data.len() - first].copy_from_slice(&data[first..]);
        }

        self.write_cursor += data.len() as u64;
        Ok(())
    }

    /// Remove and return the `n` oldest unread bytes, in order.
    ///
    /// Fails with `InvalidArgument` when `n` exceeds the capacity and with
    /// `BufferUnderrun` when fewer than `n` bytes are buffered; either way
    /// cursors and storage are untouched. `read(0)` always succeeds with an
    /// empty result. The copy wraps in at most two legs, mirroring `write`.
    pub fn read(&mut self, n: usize) -> Result<Vec<u8>, RingError> {
        if n > self.capacity {
            return Err(RingError::InvalidArgument);
        }
        if self.read_cursor + n as u64 > self.write_cursor {
            return Err(RingError::BufferUnderrun);
        }

        let start = self.offset(self.read_cursor);
        let end = start + n;
        let mut out = Vec::with_capacity(n);
        if end <= self.capacity {
            out.extend_from_slice(&self.buf[start..end]);
        } else {
            out.extend_from_slice(&self.buf[start..self.capacity]);
            out.extend_from_slice(&self.buf[..end - self.capacity]);
        }

        self.read_cursor += n as u64;
        Ok(out)
    }

    /// Fixed storage size in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of buffered-but-unread bytes.
    pub fn len(&self) -> usize {
        (self.write_cursor - self.read_cursor) as usize
    }

    /// True when no unread bytes are buffered.
    pub fn is_empty(&self) -> bool {
        self.read_cursor == self.write_cursor
    }

    /// True when occupancy has reached capacity.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Total bytes ever written through this buffer.
    pub fn bytes_written(&self) -> u64 {
        self.write_cursor
    }

    /// Total bytes ever consumed from this buffer, whether popped, read, or
    /// displaced by eviction.
    pub fn bytes_read(&self) -> u64 {
        self.read_cursor
    }

    /// Physical storage offset for a logical cursor position.
    fn offset(&self, cursor: u64) -> usize {
        // capacity is guaranteed non-zero after construction.
        (cursor % self.capacity as u64) as usize
    }
}

#[cfg(test)]
#[path = "ring_tests.rs"]
mod tests;
