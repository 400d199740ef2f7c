//! Section lookup in a BRIG module buffer.

use crate::bytes::Bytes;
use crate::error::{ContractViolation, Error};
use crate::schema::enums::SectionIndex;

const BRIG_IDENTIFICATION: &[u8; 8] = b"HSA BRIG";

/// Size of the fixed module header in bytes.
pub const MODULE_HEADER_SIZE: usize = 104;

/// Fixed header at the start of every BRIG module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleHeader {
    pub major: u32,
    pub minor: u32,
    /// Declared size of the whole module
    pub byte_count: u64,
    pub hash: [u8; 64],
    pub section_count: u32,
    /// Offset of the section offset table
    pub section_index: u64,
}

impl ModuleHeader {
    /// Parse the module header, `None` if `data` is too short or is not a
    /// BRIG module.
    #[must_use]
    pub fn parse(data: &[u8]) -> Option<Self> {
        let (identification, _) = data.split_first_chunk::<8>()?;
        if identification != BRIG_IDENTIFICATION {
            return None;
        }
        let bytes = Bytes::new(data);
        Some(ModuleHeader {
            major: bytes.read_u32(8).ok()?,
            minor: bytes.read_u32(12).ok()?,
            byte_count: bytes.read_u64(16).ok()?,
            hash: bytes.read_array(24).ok()?,
            // 4 reserved bytes at 88
            section_count: bytes.read_u32(92).ok()?,
            section_index: bytes.read_u64(96).ok()?,
        })
    }
}

/// A loaded BRIG module image
#[derive(Debug, Clone, Copy)]
pub struct BrigModule<'a> {
    pub header: ModuleHeader,
    bytes: Bytes<'a>,
}

impl<'a> BrigModule<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        let header = ModuleHeader::parse(data).ok_or(Error::NotBrig)?;
        Ok(Self {
            header,
            bytes: Bytes::new(data),
        })
    }

    #[must_use]
    pub fn section_count(&self) -> u32 {
        self.header.section_count
    }

    /// Header of section `index`.
    ///
    /// The header is not checked against the module size; its accessors
    /// report a truncated buffer instead.
    pub fn section(&self, index: u32) -> Result<SectionHeader<'a>, Error> {
        let count = self.header.section_count;
        if index >= count {
            return Err(ContractViolation::SectionIndex { index, count }.into());
        }
        let entry = usize::try_from(self.header.section_index)
            .ok()
            .and_then(|table| {
                let delta = usize::try_from(index).ok()?.checked_mul(8)?;
                table.checked_add(delta)
            })
            .ok_or(Error::Truncated {
                offset: usize::MAX,
                len: 8,
            })?;
        let offset = self.bytes.read_u64(entry)?;
        if offset >= u64::from(u32::MAX) {
            return Err(ContractViolation::SectionOffset(offset).into());
        }
        log::trace!("section {index} at offset {offset:#x}");
        Ok(SectionHeader {
            offset: offset as u32,
            bytes: self.bytes,
        })
    }

    /// One of the three standard sections.
    pub fn standard_section(&self, index: SectionIndex) -> Result<SectionHeader<'a>, Error> {
        self.section(index.into())
    }

    /// Headers of all sections, in index order.
    pub fn sections(&self) -> impl Iterator<Item = Result<SectionHeader<'a>, Error>> + '_ {
        (0..self.header.section_count).map(|index| self.section(index))
    }
}

/// View of a section header inside a module buffer
#[derive(Debug, Clone, Copy)]
pub struct SectionHeader<'a> {
    offset: u32,
    bytes: Bytes<'a>,
}

impl<'a> SectionHeader<'a> {
    /// Offset of the header from the start of the module.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    fn field(&self, delta: usize) -> usize {
        self.offset as usize + delta
    }

    /// Size of the section including its header.
    pub fn byte_count(&self) -> Result<u64, Error> {
        self.bytes.read_u64(self.field(0))
    }

    /// Size of the header including the name.
    pub fn header_byte_count(&self) -> Result<u32, Error> {
        self.bytes.read_u32(self.field(8))
    }

    pub fn name(&self) -> Result<&'a [u8], Error> {
        let len = self.bytes.read_u32(self.field(12))?;
        self.bytes.slice(self.field(16), len as usize)
    }

    /// The whole section, header included.
    pub fn data(&self) -> Result<&'a [u8], Error> {
        let len = usize::try_from(self.byte_count()?).map_err(|_| Error::Truncated {
            offset: self.offset as usize,
            len: usize::MAX,
        })?;
        self.bytes.slice(self.offset as usize, len)
    }
}
