//! Identifier → reader lookup for polymorphic decoding.
//!
//! When a slot's static type is "any object" rather than one base type,
//! the decoder reads 4 bytes, asks [`resolve`] for the matching reader and
//! delegates to it. The table is a compile-time `match` over the closed
//! constructor set of the schema: it is immutable, needs no registration
//! step, and concurrent decodes can consult it freely.
//!
//! An identifier absent from the table means protocol-version skew or
//! stream corruption; no safe continuation exists without knowing the
//! unknown type's field layout, so lookup failure is a fatal decode error.

use crate::deserialize::{Buffer, Error, Result};
use crate::{Deserializable, Identifiable, Serializable, enums, types};

/// Any boxed object the schema can produce, tagged by its base type.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Bool(bool),
    Chat(enums::Chat),
    Peer(enums::Peer),
    User(enums::User),
    NotificationSound(enums::NotificationSound),
    PhoneCall(enums::PhoneCall),
    PhoneCallDiscardReason(enums::PhoneCallDiscardReason),
    PhoneCallProtocol(enums::PhoneCallProtocol),
    PhoneConnection(enums::PhoneConnection),
    InputPhoneCall(enums::InputPhoneCall),
    DataJson(enums::DataJson),
    MessagesChats(enums::messages::Chats),
    AccountSavedRingtones(enums::account::SavedRingtones),
}

/// Reader for one constructor: receives the already-consumed identifier
/// and the cursor positioned just past it.
pub type ReadFn = fn(u32, Buffer) -> Result<Object>;

/// Look up the reader for a constructor identifier.
///
/// Succeeds for every constructor in the schema's closed set and fails
/// with [`Error::UnexpectedConstructor`] for anything else.
pub fn resolve(id: u32) -> Result<ReadFn> {
    Ok(match id {
        crate::BOOL_TRUE_ID | crate::BOOL_FALSE_ID => read_bool,

        types::ChatEmpty::CONSTRUCTOR_ID
        | types::Chat::CONSTRUCTOR_ID
        | types::ChatForbidden::CONSTRUCTOR_ID
        | types::Channel::CONSTRUCTOR_ID
        | types::ChannelForbidden::CONSTRUCTOR_ID => read_chat,

        types::PeerUser::CONSTRUCTOR_ID
        | types::PeerChat::CONSTRUCTOR_ID
        | types::PeerChannel::CONSTRUCTOR_ID => read_peer,

        types::UserEmpty::CONSTRUCTOR_ID | types::User::CONSTRUCTOR_ID => read_user,

        types::NotificationSoundDefault::CONSTRUCTOR_ID
        | types::NotificationSoundNone::CONSTRUCTOR_ID
        | types::NotificationSoundLocal::CONSTRUCTOR_ID
        | types::NotificationSoundRingtone::CONSTRUCTOR_ID => read_notification_sound,

        types::PhoneCallEmpty::CONSTRUCTOR_ID
        | types::PhoneCallWaiting::CONSTRUCTOR_ID
        | types::PhoneCallRequested::CONSTRUCTOR_ID
        | types::PhoneCallAccepted::CONSTRUCTOR_ID
        | types::PhoneCall::CONSTRUCTOR_ID
        | types::PhoneCallDiscarded::CONSTRUCTOR_ID => read_phone_call,

        types::PhoneCallDiscardReasonMissed::CONSTRUCTOR_ID
        | types::PhoneCallDiscardReasonDisconnect::CONSTRUCTOR_ID
        | types::PhoneCallDiscardReasonHangup::CONSTRUCTOR_ID
        | types::PhoneCallDiscardReasonBusy::CONSTRUCTOR_ID => read_discard_reason,

        types::PhoneCallProtocol::CONSTRUCTOR_ID => read_protocol,
        types::PhoneConnection::CONSTRUCTOR_ID => read_connection,
        types::InputPhoneCall::CONSTRUCTOR_ID => read_input_phone_call,
        types::DataJson::CONSTRUCTOR_ID => read_data_json,

        types::messages::Chats::CONSTRUCTOR_ID
        | types::messages::ChatsSlice::CONSTRUCTOR_ID => read_messages_chats,

        types::account::SavedRingtones::CONSTRUCTOR_ID
        | types::account::SavedRingtonesNotModified::CONSTRUCTOR_ID => read_saved_ringtones,

        _ => return Err(Error::UnexpectedConstructor { id }),
    })
}

/// Read one boxed object of unknown type: identifier first, then the
/// fields of whichever constructor it names.
pub fn read_object(buf: Buffer) -> Result<Object> {
    let id = u32::deserialize(buf)?;
    resolve(id)?(id, buf)
}

impl Serializable for Object {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        match self {
            Self::Bool(x) => x.serialize(buf),
            Self::Chat(x) => x.serialize(buf),
            Self::Peer(x) => x.serialize(buf),
            Self::User(x) => x.serialize(buf),
            Self::NotificationSound(x) => x.serialize(buf),
            Self::PhoneCall(x) => x.serialize(buf),
            Self::PhoneCallDiscardReason(x) => x.serialize(buf),
            Self::PhoneCallProtocol(x) => x.serialize(buf),
            Self::PhoneConnection(x) => x.serialize(buf),
            Self::InputPhoneCall(x) => x.serialize(buf),
            Self::DataJson(x) => x.serialize(buf),
            Self::MessagesChats(x) => x.serialize(buf),
            Self::AccountSavedRingtones(x) => x.serialize(buf),
        }
    }
}

impl Deserializable for Object {
    fn deserialize(buf: Buffer) -> Result<Self> {
        read_object(buf)
    }
}

// ─── Per-role readers ────────────────────────────────────────────────────────

fn read_bool(id: u32, _buf: Buffer) -> Result<Object> {
    match id {
        crate::BOOL_TRUE_ID => Ok(Object::Bool(true)),
        crate::BOOL_FALSE_ID => Ok(Object::Bool(false)),
        id => Err(Error::UnexpectedConstructor { id }),
    }
}

fn read_chat(id: u32, buf: Buffer) -> Result<Object> {
    enums::Chat::from_id(id, buf).map(Object::Chat)
}

fn read_peer(id: u32, buf: Buffer) -> Result<Object> {
    enums::Peer::from_id(id, buf).map(Object::Peer)
}

fn read_user(id: u32, buf: Buffer) -> Result<Object> {
    enums::User::from_id(id, buf).map(Object::User)
}

fn read_notification_sound(id: u32, buf: Buffer) -> Result<Object> {
    enums::NotificationSound::from_id(id, buf).map(Object::NotificationSound)
}

fn read_phone_call(id: u32, buf: Buffer) -> Result<Object> {
    enums::PhoneCall::from_id(id, buf).map(Object::PhoneCall)
}

fn read_discard_reason(id: u32, buf: Buffer) -> Result<Object> {
    enums::PhoneCallDiscardReason::from_id(id, buf).map(Object::PhoneCallDiscardReason)
}

fn read_protocol(id: u32, buf: Buffer) -> Result<Object> {
    enums::PhoneCallProtocol::from_id(id, buf).map(Object::PhoneCallProtocol)
}

fn read_connection(id: u32, buf: Buffer) -> Result<Object> {
    enums::PhoneConnection::from_id(id, buf).map(Object::PhoneConnection)
}

fn read_input_phone_call(id: u32, buf: Buffer) -> Result<Object> {
    enums::InputPhoneCall::from_id(id, buf).map(Object::InputPhoneCall)
}

fn read_data_json(id: u32, buf: Buffer) -> Result<Object> {
    enums::DataJson::from_id(id, buf).map(Object::DataJson)
}

fn read_messages_chats(id: u32, buf: Buffer) -> Result<Object> {
    enums::messages::Chats::from_id(id, buf).map(Object::MessagesChats)
}

fn read_saved_ringtones(id: u32, buf: Buffer) -> Result<Object> {
    enums::account::SavedRingtones::from_id(id, buf).map(Object::AccountSavedRingtones)
}

// ─── Diagnostics ─────────────────────────────────────────────────────────────

/// The TL name for a known constructor or function identifier.
pub fn name_for_id(id: u32) -> Option<&'static str> {
    Some(match id {
        0x997275b5 => "boolTrue",
        0xbc799737 => "boolFalse",
        0x1cb5c415 => "vector",

        0x29562865 => "chatEmpty",
        0x41cbf256 => "chat",
        0x6592a1a7 => "chatForbidden",
        0x8261ac61 => "channel",
        0x17d493d5 => "channelForbidden",

        0x59511722 => "peerUser",
        0x36c6019a => "peerChat",
        0xa2a5371e => "peerChannel",

        0xd3bc4b7a => "userEmpty",
        0x215c4438 => "user",

        0x1fb33026 => "notificationSoundDefault",
        0x6f0c34df => "notificationSoundNone",
        0x830b9ae4 => "notificationSoundLocal",
        0xff6c8049 => "notificationSoundRingtone",

        0x5366c915 => "phoneCallEmpty",
        0xc5226f17 => "phoneCallWaiting",
        0x14b0ed0c => "phoneCallRequested",
        0x3660c311 => "phoneCallAccepted",
        0x967f7c67 => "phoneCall",
        0x50ca4de1 => "phoneCallDiscarded",

        0x85e42301 => "phoneCallDiscardReasonMissed",
        0xe095c1a0 => "phoneCallDiscardReasonDisconnect",
        0x57adc690 => "phoneCallDiscardReasonHangup",
        0xfaf7e8c9 => "phoneCallDiscardReasonBusy",

        0xfc878fc8 => "phoneCallProtocol",
        0x9cc123c7 => "phoneConnection",
        0x1e36fded => "inputPhoneCall",
        0x7d748d04 => "dataJSON",

        0x64ff9fd5 => "messages.chats",
        0x9cd81144 => "messages.chatsSlice",

        0xc1e92cc5 => "account.savedRingtones",
        0xb7263f6d => "account.savedRingtonesNotModified",

        0x42ff96ed => "phone.requestCall",
        0x3bd2b4a0 => "phone.acceptCall",
        0x2efe1722 => "phone.confirmCall",
        0xb2cbc1c0 => "phone.discardCall",
        0x59ead627 => "phone.setCallRating",
        0x17d54f61 => "phone.receivedCall",
        0x49e9528f => "messages.getChats",
        0x0d91a548 => "users.getUsers",
        0x3dea5b03 => "account.saveRingtone",
        0xe1902288 => "account.getSavedRingtones",

        _ => return None,
    })
}
