//! Scratch buffer shared by a handler lineage
//!
//! - `ScratchBuffer`: cloneable byte sink a delegate handler writes into
//! - `Scratch`: the buffer plus the gate that serializes its users
//! - `BufferLease`: RAII guard that empties the buffer before releasing the gate

use parking_lot::{Mutex, MutexGuard};
use std::io;
use std::sync::Arc;

/// Shared, growable byte buffer. Clones refer to the same bytes.
#[derive(Debug, Clone, Default)]
pub struct ScratchBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// Run `f` over the current contents
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.bytes.lock())
    }

    /// Drop the contents, keeping the allocation
    pub fn reset(&self) {
        self.bytes.lock().clear();
    }
}

impl io::Write for ScratchBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A scratch buffer and the gate guarding it
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    buffer: ScratchBuffer,
    gate: Arc<Mutex<()>>,
}

impl Scratch {
    pub fn new(buffer: ScratchBuffer) -> Self {
        Self {
            buffer,
            gate: Arc::new(Mutex::new(())),
        }
    }

    pub fn buffer(&self) -> &ScratchBuffer {
        &self.buffer
    }

    /// Block until the buffer is free and take exclusive use of it
    pub fn lease(&self) -> BufferLease<'_> {
        BufferLease {
            buffer: &self.buffer,
            _gate: self.gate.lock(),
        }
    }
}

/// Exclusive use of a [`Scratch`] buffer.
///
/// Dropping the lease empties the buffer and then releases the gate, on
/// every exit path.
pub struct BufferLease<'a> {
    buffer: &'a ScratchBuffer,
    _gate: MutexGuard<'a, ()>,
}

impl BufferLease<'_> {
    pub fn buffer(&self) -> &ScratchBuffer {
        self.buffer
    }
}

impl Drop for BufferLease<'_> {
    fn drop(&mut self) {
        // Runs before `_gate` is dropped.
        self.buffer.reset();
    }
}
