//! The [`Deserializable`] trait, the [`Cursor`] it reads from, and the
//! primitive impls.
//!
//! Decoding is all-or-nothing: any failure aborts the enclosing decode,
//! because a misaligned field corrupts every sibling and parent object
//! sharing the same stream.

use std::fmt;

// ─── Error ───────────────────────────────────────────────────────────────────

/// Errors that can occur during deserialization.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The buffer ran out before the value was fully read. Also covers a
    /// length prefix that promises more bytes than remain.
    UnexpectedEof,
    /// A 4-byte identifier that names no known constructor in this context.
    UnexpectedConstructor {
        /// The offending identifier, as read from the wire.
        id: u32,
    },
    /// A `string` payload was not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of buffer"),
            Self::UnexpectedConstructor { id } => {
                write!(f, "unexpected constructor id: {id:#010x}")
            }
            Self::InvalidUtf8 => write!(f, "string payload is not valid utf-8"),
        }
    }
}

impl std::error::Error for Error {}

/// Specialized `Result` for deserialization.
pub type Result<T> = std::result::Result<T, Error>;

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// A zero-copy cursor over an in-memory byte slice.
///
/// Deliberately not `std::io::Read`: TL decoding has exactly the error
/// cases above and nothing else, and never blocks.
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn from_slice(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consume and return the next `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::UnexpectedEof)?;
        if end > self.buf.len() {
            return Err(Error::UnexpectedEof);
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Consume exactly `N` bytes into a fixed-size array.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }
}

/// Alias used by the schema modules: `crate::deserialize::Buffer<'_, '_>`.
pub type Buffer<'a, 'b> = &'a mut Cursor<'b>;

// ─── Deserializable ──────────────────────────────────────────────────────────

/// Deserialize a value from TL binary format.
///
/// `deserialize` must advance the cursor by exactly the number of bytes the
/// value occupies on the wire — no more, no less.
pub trait Deserializable: Sized {
    /// Read `Self` from `buf`, advancing its position.
    fn deserialize(buf: Buffer) -> Result<Self>;

    /// Convenience: deserialize from the start of a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::deserialize(&mut Cursor::from_slice(bytes))
    }
}

// ─── Fixed-width primitives ──────────────────────────────────────────────────

impl Deserializable for i32 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(i32::from_le_bytes(buf.take_array()?))
    }
}

impl Deserializable for u32 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(u32::from_le_bytes(buf.take_array()?))
    }
}

impl Deserializable for i64 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(i64::from_le_bytes(buf.take_array()?))
    }
}

impl Deserializable for f64 {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(f64::from_le_bytes(buf.take_array()?))
    }
}

/// `int128` — 16 little-endian two's-complement bytes.
impl Deserializable for [u8; 16] {
    fn deserialize(buf: Buffer) -> Result<Self> {
        buf.take_array()
    }
}

/// `int256` — 32 little-endian two's-complement bytes.
impl Deserializable for [u8; 32] {
    fn deserialize(buf: Buffer) -> Result<Self> {
        buf.take_array()
    }
}

/// Booleans are degenerate zero-field constructors, dispatched through the
/// same identifier mechanism as any other type.
impl Deserializable for bool {
    fn deserialize(buf: Buffer) -> Result<Self> {
        match u32::deserialize(buf)? {
            crate::BOOL_TRUE_ID => Ok(true),
            crate::BOOL_FALSE_ID => Ok(false),
            id => Err(Error::UnexpectedConstructor { id }),
        }
    }
}

// ─── Bytes / string ──────────────────────────────────────────────────────────

impl Deserializable for Vec<u8> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let first = buf.take_array::<1>()?[0];
        let (header_len, len) = if first == 0xfe {
            let b = buf.take_array::<3>()?;
            (4, u32::from_le_bytes([b[0], b[1], b[2], 0]) as usize)
        } else {
            (1, first as usize)
        };

        let data = buf.take(len)?.to_vec();
        buf.take(crate::wire_padding(header_len + len))?;
        Ok(data)
    }
}

impl Deserializable for String {
    fn deserialize(buf: Buffer) -> Result<Self> {
        String::from_utf8(Vec::<u8>::deserialize(buf)?).map_err(|_| Error::InvalidUtf8)
    }
}

// ─── Vectors ─────────────────────────────────────────────────────────────────

/// Boxed `Vector<T>`: the [`crate::VECTOR_ID`] header, an element count,
/// then exactly `count` elements. The element type is known statically from
/// the surrounding field declaration, never from the registry.
impl<T: Deserializable> Deserializable for Vec<T> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let id = u32::deserialize(buf)?;
        if id != crate::VECTOR_ID {
            return Err(Error::UnexpectedConstructor { id });
        }
        let len = i32::deserialize(buf)? as usize;
        (0..len).map(|_| T::deserialize(buf)).collect()
    }
}

/// Bare `vector<T>` — count and elements, no constructor header.
impl<T: Deserializable> Deserializable for crate::RawVec<T> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let len = i32::deserialize(buf)? as usize;
        let items = (0..len).map(|_| T::deserialize(buf)).collect::<Result<_>>()?;
        Ok(crate::RawVec(items))
    }
}
