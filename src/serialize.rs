//! The [`Serializable`] trait and its impls for the primitive TL wire types.
//!
//! Encoding never fails: it is a pure transformation from an already
//! well-typed value to bytes. All multi-byte integers are little-endian.

/// Serialize `self` into TL binary format.
pub trait Serializable {
    /// Append the serialized form of `self` to `buf`.
    fn serialize(&self, buf: &mut impl Extend<u8>);

    /// Convenience: allocate a fresh `Vec<u8>` and serialize into it.
    fn to_bytes(&self) -> Vec<u8> {
        let mut v = Vec::new();
        self.serialize(&mut v);
        v
    }
}

// ─── bool ────────────────────────────────────────────────────────────────────

/// `true` → `boolTrue#997275b5`, `false` → `boolFalse#bc799737`.
///
/// Four bytes on the wire, never a 1-byte tag: booleans share the
/// constructor-identifier namespace with every other type.
impl Serializable for bool {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let id = if *self { crate::BOOL_TRUE_ID } else { crate::BOOL_FALSE_ID };
        id.serialize(buf);
    }
}

// ─── integers / double ───────────────────────────────────────────────────────

impl Serializable for i32 {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes());
    }
}

impl Serializable for u32 {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes());
    }
}

impl Serializable for i64 {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes());
    }
}

impl Serializable for f64 {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes());
    }
}

impl Serializable for [u8; 16] {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(*self);
    }
}

impl Serializable for [u8; 32] {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(*self);
    }
}

// ─── bytes / string ──────────────────────────────────────────────────────────

/// TL `bytes`: a length header, the payload, then zero padding so that
/// header + payload + padding is a multiple of 4.
///
/// * `len < 254`: `[len as u8][payload][padding]`
/// * `len ≥ 254`: `[0xfe][len as 3 LE bytes][payload][padding]`
impl Serializable for &[u8] {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let len = self.len();
        let header_len = if len < 0xfe {
            buf.extend([len as u8]);
            1
        } else {
            // The escape form carries only 3 length bytes.
            debug_assert!(len < (1 << 24), "bytes payload too long for the TL length header");
            buf.extend([0xfe, len as u8, (len >> 8) as u8, (len >> 16) as u8]);
            4
        };

        buf.extend(self.iter().copied());
        buf.extend(std::iter::repeat_n(0u8, crate::wire_padding(header_len + len)));
    }
}

impl Serializable for Vec<u8> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.as_slice().serialize(buf);
    }
}

/// `string` is `bytes` whose payload is UTF-8 text.
impl Serializable for String {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.as_bytes().serialize(buf);
    }
}

// ─── vectors ─────────────────────────────────────────────────────────────────

/// Boxed `Vector<T>`: `[0x1cb5c415][count:i32][count × T]`.
impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        crate::VECTOR_ID.serialize(buf);
        (self.len() as i32).serialize(buf);
        for item in self {
            item.serialize(buf);
        }
    }
}

/// Bare `vector<T>` — count and elements only.
impl<T: Serializable> Serializable for crate::RawVec<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (self.0.len() as i32).serialize(buf);
        for item in &self.0 {
            item.serialize(buf);
        }
    }
}

// ─── Option ──────────────────────────────────────────────────────────────────

/// Conditional fields write nothing when absent; presence is recorded in
/// the constructor's flags word, not in the field's own bytes.
impl<T: Serializable> Serializable for Option<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        if let Some(v) = self {
            v.serialize(buf);
        }
    }
}
