// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bytering: a fixed-capacity circular byte buffer.
//!
//! The buffer owns a contiguous byte region of a caller-chosen capacity and
//! tracks read/write positions as monotone logical cursors, so occupancy is
//! always `write - read` with no separate bookkeeping. See [`ring::RingBuffer`].

pub mod error;
pub mod ring;
