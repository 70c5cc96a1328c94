//! TL binary codec and schema types for the `team.raw` RPC protocol.
//!
//! TL (Type Language) is a schema-driven wire format: every concrete type
//! ("constructor") owns a globally unique 32-bit identifier, and a value is
//! encoded as that identifier followed by its fields in declared order.
//! Abstract base types are closed unions of constructors; the reader picks
//! the concrete variant from the 4-byte tag on the wire.
//!
//! # Overview
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`types`]     | Concrete constructors (bare types) as `struct`s           |
//! | [`enums`]     | Base types as closed `enum`s over their constructors      |
//! | [`functions`] | RPC requests as `struct`s implementing [`RemoteCall`]     |
//! | [`registry`]  | Identifier → reader lookup for polymorphic decoding       |
//!
//! # Usage
//!
//! ```rust
//! use team_tl_types::{functions, Serializable};
//!
//! let req = functions::messages::GetChats { id: vec![10, 20] };
//! let bytes = req.to_bytes();
//! // Hand `bytes` to the transport layer; decode the reply with
//! // <functions::messages::GetChats as team_tl_types::RemoteCall>::Return.
//! # let _ = bytes;
//! ```
//!
//! Decoding is purely synchronous and never performs I/O: the transport
//! layer owns the socket and hands finished byte buffers to this crate.

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

pub mod deserialize;
pub mod enums;
pub mod functions;
mod macros;
pub mod registry;
pub mod serialize;
pub mod types;

pub use deserialize::{Cursor, Deserializable};
pub use registry::{Object, name_for_id, read_object, resolve};
pub use serialize::Serializable;

/// The schema layer this crate was written against.
pub const LAYER: i32 = 158;

/// Identifier of the `boolTrue` constructor.
pub const BOOL_TRUE_ID: u32 = 0x997275b5;

/// Identifier of the `boolFalse` constructor.
pub const BOOL_FALSE_ID: u32 = 0xbc799737;

/// Identifier of the boxed `Vector` constructor.
pub const VECTOR_ID: u32 = 0x1cb5c415;

/// Bare `vector` — a length-prefixed list without the usual [`VECTOR_ID`]
/// header. Only appears where the surrounding format already implies a list
/// (e.g. message containers in the transport layer).
#[derive(Clone, Debug, PartialEq)]
pub struct RawVec<T>(pub Vec<T>);

/// Number of zero bytes needed to bring `len` up to a 4-byte boundary.
pub(crate) fn wire_padding(len: usize) -> usize {
    (4 - len % 4) % 4
}

// ─── Core traits ──────────────────────────────────────────────────────────────

/// Every concrete schema type has a unique 32-bit constructor identifier.
pub trait Identifiable {
    /// The constructor identifier as declared in the TL schema.
    const CONSTRUCTOR_ID: u32;
}

/// Marks a request object that can be sent as an RPC call.
///
/// `Return` is the type the peer answers with; the (external) dispatcher
/// uses it to decode the paired reply. On the wire a request is encoded
/// exactly like any other boxed object.
pub trait RemoteCall: Serializable {
    /// The deserialized response type.
    type Return: Deserializable;
}
