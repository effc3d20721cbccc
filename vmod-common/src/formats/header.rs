//! Reserved VMOD file header

/// Size of the reserved header in bytes
pub const VMOD_HEADER_SIZE: usize = 16;

/// VMOD file header (16 bytes)
///
/// Reserved for future use. Writers emit zeros; readers skip it without
/// interpreting the contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct VmodHeader {
    pub reserved: [u8; VMOD_HEADER_SIZE],
}

impl VmodHeader {
    pub const SIZE: usize = VMOD_HEADER_SIZE;

    pub fn new() -> Self {
        Self::default()
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.reserved
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let reserved = bytes.get(..Self::SIZE)?.try_into().ok()?;
        Some(Self { reserved })
    }
}
