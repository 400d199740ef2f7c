//! Little-endian reads that report truncation instead of panicking.

use crate::error::Error;

/// Little-endian field access over a module buffer
#[derive(Debug, Clone, Copy)]
pub struct Bytes<'a> {
    buffer: &'a [u8],
}

impl<'a> Bytes<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    /// `len` bytes starting at `offset`.
    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8], Error> {
        offset
            .checked_add(len)
            .and_then(|end| self.buffer.get(offset..end))
            .ok_or(Error::Truncated { offset, len })
    }

    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], Error> {
        let bytes = self.slice(offset, N)?;
        let mut res = [0u8; N];
        res.copy_from_slice(bytes);
        Ok(res)
    }

    pub fn read_u32(&self, offset: usize) -> Result<u32, Error> {
        self.read_array(offset).map(u32::from_le_bytes)
    }

    pub fn read_u64(&self, offset: usize) -> Result<u64, Error> {
        self.read_array(offset).map(u64::from_le_bytes)
    }
}
