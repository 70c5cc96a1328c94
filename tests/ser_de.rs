//! Wire-level tests for the primitive codec.

use team_tl_types::deserialize::Error;
use team_tl_types::{Cursor, Deserializable, RawVec, Serializable};

// ── Fixed-width primitives ────────────────────────────────────────────────────

#[test]
fn roundtrip_i32() {
    for v in [0i32, -1, 42, i32::MIN, i32::MAX] {
        assert_eq!(i32::from_bytes(&v.to_bytes()).unwrap(), v);
        assert_eq!(v.to_bytes(), v.to_le_bytes());
    }
}

#[test]
fn roundtrip_i64() {
    for v in [0i64, -1, 1_234_567_890, i64::MIN, i64::MAX] {
        assert_eq!(i64::from_bytes(&v.to_bytes()).unwrap(), v);
        assert_eq!(v.to_bytes(), v.to_le_bytes());
    }
}

#[test]
fn roundtrip_f64() {
    for v in [0.0f64, -1.5, f64::MIN_POSITIVE, f64::MAX] {
        assert_eq!(f64::from_bytes(&v.to_bytes()).unwrap(), v);
    }
}

#[test]
fn roundtrip_int128() {
    let v: [u8; 16] = core::array::from_fn(|i| i as u8);
    assert_eq!(v.to_bytes(), v);
    assert_eq!(<[u8; 16]>::from_bytes(&v.to_bytes()).unwrap(), v);
}

#[test]
fn roundtrip_int256() {
    let v: [u8; 32] = core::array::from_fn(|i| (255 - i) as u8);
    assert_eq!(v.to_bytes(), v);
    assert_eq!(<[u8; 32]>::from_bytes(&v.to_bytes()).unwrap(), v);
}

// ── Booleans ─────────────────────────────────────────────────────────────────

#[test]
fn bool_true_is_its_constructor_id() {
    let bytes = true.to_bytes();
    assert_eq!(bytes, 0x997275b5u32.to_le_bytes());
    assert_eq!(bool::from_bytes(&bytes).unwrap(), true);
}

#[test]
fn bool_false_is_its_constructor_id() {
    let bytes = false.to_bytes();
    assert_eq!(bytes, 0xbc799737u32.to_le_bytes());
    assert_eq!(bool::from_bytes(&bytes).unwrap(), false);
}

#[test]
fn bool_rejects_other_ids() {
    assert_eq!(
        bool::from_bytes(&[0, 0, 0, 0]),
        Err(Error::UnexpectedConstructor { id: 0 })
    );
}

// ── Bytes / string ────────────────────────────────────────────────────────────

#[test]
fn string_three_bytes_needs_no_padding() {
    // 1-byte header + 3-byte payload is already 4-aligned.
    let s = "abc".to_owned();
    assert_eq!(s.to_bytes(), [3, b'a', b'b', b'c']);
    assert_eq!(String::from_bytes(&s.to_bytes()).unwrap(), s);
}

#[test]
fn string_two_bytes_gets_one_zero_pad() {
    let s = "hi".to_owned();
    assert_eq!(s.to_bytes(), [2, b'h', b'i', 0]);
}

#[test]
fn empty_string_is_four_zero_bytes() {
    let s = String::new();
    assert_eq!(s.to_bytes(), [0, 0, 0, 0]);
    assert_eq!(String::from_bytes(&s.to_bytes()).unwrap(), s);
}

#[test]
fn strings_always_align_to_four_bytes() {
    for len in 0..600 {
        let s = "x".repeat(len);
        let bytes = s.to_bytes();
        assert_eq!(bytes.len() % 4, 0, "len {len} not aligned");
        assert_eq!(String::from_bytes(&bytes).unwrap(), s);
    }
}

#[test]
fn long_bytes_use_the_escape_header() {
    let v = vec![7u8; 254];
    let bytes = v.to_bytes();
    // 254 crosses into the `0xfe` + 3-byte-length form.
    assert_eq!(&bytes[..4], [0xfe, 254, 0, 0]);
    assert_eq!(bytes.len(), 260); // 4 + 254 + 2 padding
    assert_eq!(Vec::<u8>::from_bytes(&bytes).unwrap(), v);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "too long for the TL length header")]
fn bytes_past_the_three_byte_length_limit_are_rejected() {
    let v = vec![0u8; 1 << 24];
    let _ = v.to_bytes();
}

#[test]
fn roundtrip_bytes_all_values() {
    let v: Vec<u8> = (0u8..=255).collect();
    assert_eq!(Vec::<u8>::from_bytes(&v.to_bytes()).unwrap(), v);
}

#[test]
fn string_rejects_invalid_utf8() {
    assert_eq!(
        String::from_bytes(&[2, 0xff, 0xfe, 0]),
        Err(Error::InvalidUtf8)
    );
}

#[test]
fn length_prefix_past_end_is_fatal() {
    // Header promises 10 payload bytes; only 2 follow.
    assert_eq!(Vec::<u8>::from_bytes(&[10, 1, 2]), Err(Error::UnexpectedEof));
}

// ── Vectors ───────────────────────────────────────────────────────────────────

#[test]
fn vector_layout_is_id_count_elements() {
    let v: Vec<i32> = vec![1, 2, -3];
    let bytes = v.to_bytes();
    assert_eq!(&bytes[..4], 0x1cb5c415u32.to_le_bytes());
    assert_eq!(&bytes[4..8], 3i32.to_le_bytes());
    assert_eq!(Vec::<i32>::from_bytes(&bytes).unwrap(), v);
}

#[test]
fn roundtrip_empty_vector() {
    let v: Vec<i64> = vec![];
    assert_eq!(Vec::<i64>::from_bytes(&v.to_bytes()).unwrap(), v);
}

#[test]
fn roundtrip_vector_of_strings() {
    let v = vec!["".to_owned(), "one".to_owned(), "twenty-two".to_owned()];
    assert_eq!(Vec::<String>::from_bytes(&v.to_bytes()).unwrap(), v);
}

#[test]
fn vector_rejects_wrong_header() {
    let mut bytes = vec![1, 2, 3, 4]; // not the vector constructor
    bytes.extend(0i32.to_le_bytes());
    assert_eq!(
        Vec::<i32>::from_bytes(&bytes),
        Err(Error::UnexpectedConstructor { id: 0x04030201 })
    );
}

#[test]
fn raw_vec_has_no_header() {
    let v = RawVec(vec![5i32, 6]);
    let bytes = v.to_bytes();
    assert_eq!(&bytes[..4], 2i32.to_le_bytes());
    assert_eq!(bytes.len(), 12);
    assert_eq!(RawVec::<i32>::from_bytes(&bytes).unwrap(), v);
}

// ── Cursor behaviour ─────────────────────────────────────────────────────────

#[test]
fn truncated_primitive_is_fatal() {
    assert_eq!(i32::from_bytes(&[1, 2]), Err(Error::UnexpectedEof));
    assert_eq!(i64::from_bytes(&[1, 2, 3, 4]), Err(Error::UnexpectedEof));
    assert_eq!(<[u8; 16]>::from_bytes(&[0; 15]), Err(Error::UnexpectedEof));
}

#[test]
fn cursor_advances_exactly_past_each_value() {
    let mut bytes = 7i32.to_bytes();
    bytes.extend("abc".to_owned().to_bytes());
    bytes.extend(true.to_bytes());

    let mut cursor = Cursor::from_slice(&bytes);
    assert_eq!(i32::deserialize(&mut cursor).unwrap(), 7);
    assert_eq!(cursor.pos(), 4);
    assert_eq!(String::deserialize(&mut cursor).unwrap(), "abc");
    assert_eq!(cursor.pos(), 8);
    assert_eq!(bool::deserialize(&mut cursor).unwrap(), true);
    assert_eq!(cursor.remaining(), 0);
}

// ── Option passthrough ───────────────────────────────────────────────────────

#[test]
fn option_none_writes_nothing() {
    let v: Option<i32> = None;
    assert_eq!(v.to_bytes(), b"");
}

#[test]
fn option_some_writes_inner() {
    let v: Option<i32> = Some(42);
    assert_eq!(v.to_bytes(), 42i32.to_bytes());
}
