//! Declarative macros that expand one TL definition into its Rust item and
//! trait impls.
//!
//! The input mirrors the TL notation closely enough that a definition can
//! be transcribed from the schema almost verbatim:
//!
//! ```rust,ignore
//! tl_type! {
//!     /// ```tl
//!     /// channelForbidden#17d493d5 flags:# broadcast:flags.5?true … = Chat
//!     /// ```
//!     pub struct ChannelForbidden = 0x17d493d5 {
//!         flags: #;
//!         broadcast: flags.5?true;
//!         id: i64;
//!         access_hash: i64;
//!         title: String;
//!         until_date: flags.16?i32;
//!     }
//! }
//! ```
//!
//! Three field forms are recognised:
//!
//! * `name: Type;` — a plain field, always present.
//! * `name: flags.N?Type;` — conditional; stored as `Option<Type>`, written
//!   and read only when bit `N` of the flags word is set.
//! * `name: flags.N?true;` — a zero-size boolean carried entirely by bit
//!   `N`; stored as `bool`.
//!
//! `flags: #;` declares the computed bitmask word itself. It is serialized
//! at its declared position but never stored: the mask is recomputed from
//! the optional fields on every write, so it can never disagree with them.
//!
//! [`tl_type!`] emits a bare type (fields only — the enclosing enum writes
//! the identifier); [`tl_function!`] additionally writes its own identifier
//! and implements [`crate::RemoteCall`]. [`tl_enum!`] declares a base type:
//! a closed enum over its member constructors, dispatching on the
//! identifier when reading.

/// Expand one concrete (bare) schema type.
macro_rules! tl_type {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $id:literal {
            $($body:tt)*
        }
    ) => {
        $crate::macros::tl_struct! { @munch
            meta { $(#[$meta])* }
            kind { bare }
            name { $name }
            id { $id }
            ret { () }
            flagged { no }
            fields {}
            names {}
            recs {}
            rest { $($body)* }
        }
    };
}

/// Expand one RPC request type, including its expected response type.
macro_rules! tl_function {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $id:literal -> $ret:ty {
            $($body:tt)*
        }
    ) => {
        $crate::macros::tl_struct! { @munch
            meta { $(#[$meta])* }
            kind { boxed }
            name { $name }
            id { $id }
            ret { $ret }
            flagged { no }
            fields {}
            names {}
            recs {}
            rest { $($body)* }
        }
    };
}

/// Shared worker behind [`tl_type!`] and [`tl_function!`]. Munches the
/// field list into an accumulator, then emits the struct and impls.
macro_rules! tl_struct {
    // `flags: #;` — the computed bitmask word.
    (@munch
        meta { $($meta:tt)* } kind { $kind:ident } name { $name:ident } id { $id:literal }
        ret { $ret:ty } flagged { $_flagged:ident }
        fields { $($fields:tt)* } names { $($names:tt)* } recs { $($recs:tt)* }
        rest { flags: #; $($rest:tt)* }
    ) => {
        $crate::macros::tl_struct! { @munch
            meta { $($meta)* } kind { $kind } name { $name } id { $id }
            ret { $ret } flagged { yes }
            fields { $($fields)* } names { $($names)* }
            recs { $($recs)* { flagsword } }
            rest { $($rest)* }
        }
    };

    // `name: flags.N?true;` — presence bit only, no payload bytes.
    (@munch
        meta { $($meta:tt)* } kind { $kind:ident } name { $name:ident } id { $id:literal }
        ret { $ret:ty } flagged { $flagged:ident }
        fields { $($fields:tt)* } names { $($names:tt)* } recs { $($recs:tt)* }
        rest { $f:ident: flags.$bit:literal?true; $($rest:tt)* }
    ) => {
        $crate::macros::tl_struct! { @munch
            meta { $($meta)* } kind { $kind } name { $name } id { $id }
            ret { $ret } flagged { $flagged }
            fields { $($fields)* pub $f: bool, } names { $($names)* $f, }
            recs { $($recs)* { bitflag $f $bit } }
            rest { $($rest)* }
        }
    };

    // `name: flags.N?Type;` — conditional field, `Option<Type>`.
    (@munch
        meta { $($meta:tt)* } kind { $kind:ident } name { $name:ident } id { $id:literal }
        ret { $ret:ty } flagged { $flagged:ident }
        fields { $($fields:tt)* } names { $($names:tt)* } recs { $($recs:tt)* }
        rest { $f:ident: flags.$bit:literal?$t:ty; $($rest:tt)* }
    ) => {
        $crate::macros::tl_struct! { @munch
            meta { $($meta)* } kind { $kind } name { $name } id { $id }
            ret { $ret } flagged { $flagged }
            fields { $($fields)* pub $f: Option<$t>, } names { $($names)* $f, }
            recs { $($recs)* { optional $f ($t) $bit } }
            rest { $($rest)* }
        }
    };

    // `name: Type;` — plain field.
    (@munch
        meta { $($meta:tt)* } kind { $kind:ident } name { $name:ident } id { $id:literal }
        ret { $ret:ty } flagged { $flagged:ident }
        fields { $($fields:tt)* } names { $($names:tt)* } recs { $($recs:tt)* }
        rest { $f:ident: $t:ty; $($rest:tt)* }
    ) => {
        $crate::macros::tl_struct! { @munch
            meta { $($meta)* } kind { $kind } name { $name } id { $id }
            ret { $ret } flagged { $flagged }
            fields { $($fields)* pub $f: $t, } names { $($names)* $f, }
            recs { $($recs)* { plain $f ($t) } }
            rest { $($rest)* }
        }
    };

    // All fields consumed — emit the item and its impls.
    (@munch
        meta { $($meta:tt)* } kind { $kind:ident } name { $name:ident } id { $id:literal }
        ret { $ret:ty } flagged { $flagged:ident }
        fields { $($fields:tt)* } names { $($names:tt)* } recs { $($recs:tt)* }
        rest { }
    ) => {
        $($meta)*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $($fields)*
        }

        impl crate::Identifiable for $name {
            const CONSTRUCTOR_ID: u32 = $id;
        }

        $crate::macros::tl_struct! { @impl_ser $kind $flagged $name recs { $($recs)* } }
        $crate::macros::tl_struct! { @impl_de $kind $name names { $($names)* } recs { $($recs)* } }
        $crate::macros::tl_struct! { @impl_call $kind $name $ret }
    };

    // ── Serializable ─────────────────────────────────────────────────────

    (@impl_ser $kind:ident yes $name:ident recs { $($recs:tt)* }) => {
        impl crate::Serializable for $name {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                $crate::macros::tl_struct! { @write_ctor_id $kind buf }
                let __flags: u32 = 0u32 $( | $crate::macros::tl_struct!(@flag_bit self $recs) )*;
                $( $crate::macros::tl_struct! { @write_field self buf __flags $recs } )*
            }
        }
    };
    // Zero-field types write nothing; name the sink `_buf` so the empty
    // body stays warning-free.
    (@impl_ser bare no $name:ident recs { }) => {
        impl crate::Serializable for $name {
            fn serialize(&self, _buf: &mut impl Extend<u8>) {}
        }
    };
    (@impl_ser $kind:ident no $name:ident recs { $($recs:tt)* }) => {
        impl crate::Serializable for $name {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                $crate::macros::tl_struct! { @write_ctor_id $kind buf }
                $( $crate::macros::tl_struct! { @write_field self buf __flags $recs } )*
            }
        }
    };

    (@write_ctor_id bare $buf:ident) => {};
    (@write_ctor_id boxed $buf:ident) => {
        crate::Serializable::serialize(&<Self as crate::Identifiable>::CONSTRUCTOR_ID, $buf);
    };

    (@flag_bit $s:ident { flagsword }) => { 0u32 };
    (@flag_bit $s:ident { plain $f:ident ($t:ty) }) => { 0u32 };
    (@flag_bit $s:ident { bitflag $f:ident $bit:literal }) => {
        (if $s.$f { 1u32 << $bit } else { 0u32 })
    };
    (@flag_bit $s:ident { optional $f:ident ($t:ty) $bit:literal }) => {
        (if $s.$f.is_some() { 1u32 << $bit } else { 0u32 })
    };

    (@write_field $s:ident $buf:ident $fl:ident { flagsword }) => {
        crate::Serializable::serialize(&$fl, $buf);
    };
    (@write_field $s:ident $buf:ident $fl:ident { plain $f:ident ($t:ty) }) => {
        crate::Serializable::serialize(&$s.$f, $buf);
    };
    (@write_field $s:ident $buf:ident $fl:ident { bitflag $f:ident $bit:literal }) => {};
    (@write_field $s:ident $buf:ident $fl:ident { optional $f:ident ($t:ty) $bit:literal }) => {
        if let Some(ref v) = $s.$f {
            crate::Serializable::serialize(v, $buf);
        }
    };

    // ── Deserializable ───────────────────────────────────────────────────

    (@impl_de bare $name:ident names { } recs { }) => {
        impl crate::Deserializable for $name {
            fn deserialize(_buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
                Ok(Self {})
            }
        }
    };
    (@impl_de bare $name:ident names { $($names:tt)* } recs { $($recs:tt)* }) => {
        impl crate::Deserializable for $name {
            fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
                $( $crate::macros::tl_struct! { @read_field buf __flags $recs } )*
                Ok(Self { $($names)* })
            }
        }
    };
    (@impl_de boxed $name:ident names { $($names:tt)* } recs { $($recs:tt)* }) => {
        #[cfg(feature = "deserializable-functions")]
        impl crate::Deserializable for $name {
            fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
                $( $crate::macros::tl_struct! { @read_field buf __flags $recs } )*
                Ok(Self { $($names)* })
            }
        }
    };

    (@read_field $buf:ident $fl:ident { flagsword }) => {
        let $fl = <u32 as crate::Deserializable>::deserialize($buf)?;
    };
    (@read_field $buf:ident $fl:ident { plain $f:ident ($t:ty) }) => {
        let $f = <$t as crate::Deserializable>::deserialize($buf)?;
    };
    (@read_field $buf:ident $fl:ident { bitflag $f:ident $bit:literal }) => {
        let $f = $fl & (1u32 << $bit) != 0;
    };
    (@read_field $buf:ident $fl:ident { optional $f:ident ($t:ty) $bit:literal }) => {
        let $f = if $fl & (1u32 << $bit) != 0 {
            Some(<$t as crate::Deserializable>::deserialize($buf)?)
        } else {
            None
        };
    };

    // ── RemoteCall ───────────────────────────────────────────────────────

    (@impl_call bare $name:ident $ret:ty) => {};
    (@impl_call boxed $name:ident $ret:ty) => {
        impl crate::RemoteCall for $name {
            type Return = $ret;
        }
    };
}

/// Expand one base type: a closed enum whose variants are exactly the
/// member constructors. Zero-field members are declared with a leading
/// `empty` and become unit variants.
macro_rules! tl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::macros::tl_enum! { @munch
            meta { $(#[$meta])* }
            name { $name }
            bufid { __tl_buf }
            idid { __tl_id }
            vars {}
            ser_arms {}
            de_arms {}
            extra {}
            rest { $($body)* }
        }
    };

    // `empty Variant => path;` — zero-field constructor, unit variant.
    (@munch
        meta { $($meta:tt)* } name { $name:ident } bufid { $buf:ident } idid { $id:ident }
        vars { $($vars:tt)* } ser_arms { $($sa:tt)* } de_arms { $($da:tt)* } extra { $($extra:tt)* }
        rest { empty $v:ident => $p:path; $($rest:tt)* }
    ) => {
        $crate::macros::tl_enum! { @munch
            meta { $($meta)* } name { $name } bufid { $buf } idid { $id }
            vars { $($vars)* $v, }
            ser_arms { $($sa)*
                Self::$v => {
                    crate::Serializable::serialize(
                        &<$p as crate::Identifiable>::CONSTRUCTOR_ID,
                        $buf,
                    );
                }
            }
            de_arms { $($da)*
                _ if $id == <$p as crate::Identifiable>::CONSTRUCTOR_ID => Self::$v,
            }
            extra { $($extra)*
                impl From<$p> for $name {
                    fn from(_x: $p) -> Self {
                        Self::$v
                    }
                }
            }
            rest { $($rest)* }
        }
    };

    // `Variant => path;` — constructor with fields, tuple variant.
    (@munch
        meta { $($meta:tt)* } name { $name:ident } bufid { $buf:ident } idid { $id:ident }
        vars { $($vars:tt)* } ser_arms { $($sa:tt)* } de_arms { $($da:tt)* } extra { $($extra:tt)* }
        rest { $v:ident => $p:path; $($rest:tt)* }
    ) => {
        $crate::macros::tl_enum! { @munch
            meta { $($meta)* } name { $name } bufid { $buf } idid { $id }
            vars { $($vars)* $v($p), }
            ser_arms { $($sa)*
                Self::$v(x) => {
                    crate::Serializable::serialize(
                        &<$p as crate::Identifiable>::CONSTRUCTOR_ID,
                        $buf,
                    );
                    crate::Serializable::serialize(x, $buf);
                }
            }
            de_arms { $($da)*
                _ if $id == <$p as crate::Identifiable>::CONSTRUCTOR_ID =>
                    Self::$v(<$p as crate::Deserializable>::deserialize($buf)?),
            }
            extra { $($extra)*
                impl From<$p> for $name {
                    fn from(x: $p) -> Self {
                        Self::$v(x)
                    }
                }
                impl TryFrom<$name> for $p {
                    type Error = $name;
                    #[allow(unreachable_patterns)]
                    fn try_from(v: $name) -> Result<Self, Self::Error> {
                        match v {
                            $name::$v(x) => Ok(x),
                            other => Err(other),
                        }
                    }
                }
            }
            rest { $($rest)* }
        }
    };

    // All members consumed — emit the enum and its impls.
    (@munch
        meta { $($meta:tt)* } name { $name:ident } bufid { $buf:ident } idid { $id:ident }
        vars { $($vars:tt)* } ser_arms { $($sa:tt)* } de_arms { $($da:tt)* } extra { $($extra:tt)* }
        rest { }
    ) => {
        $($meta)*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($vars)*
        }

        impl $name {
            /// Decode the member named by an already-consumed constructor
            /// identifier. Fails with `UnexpectedConstructor` for any
            /// identifier outside this base type's member set.
            pub fn from_id($id: u32, $buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
                Ok(match $id {
                    $($da)*
                    _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id: $id }),
                })
            }
        }

        impl crate::Serializable for $name {
            fn serialize(&self, $buf: &mut impl Extend<u8>) {
                match self {
                    $($sa)*
                }
            }
        }

        impl crate::Deserializable for $name {
            fn deserialize($buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
                let $id = <u32 as crate::Deserializable>::deserialize($buf)?;
                Self::from_id($id, $buf)
            }
        }

        $($extra)*
    };
}

pub(crate) use {tl_enum, tl_function, tl_struct, tl_type};
