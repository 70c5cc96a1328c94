//! Base types of the `team.raw` schema, one closed `enum` per abstract role.
//!
//! A base type owns no wire representation of its own — only its member
//! constructors do. Serializing a variant writes the member's identifier
//! followed by its fields; deserializing reads an identifier and dispatches
//! to the matching member, failing with
//! [`UnexpectedConstructor`](crate::deserialize::Error::UnexpectedConstructor)
//! for anything outside the member set. Because the roles are plain enums,
//! "instantiating the abstract placeholder" is not expressible at all.

use crate::macros::tl_enum;

tl_enum! {
    /// Any kind of group or channel.
    pub enum Chat {
        Empty => crate::types::ChatEmpty;
        Chat => crate::types::Chat;
        Forbidden => crate::types::ChatForbidden;
        Channel => crate::types::Channel;
        ChannelForbidden => crate::types::ChannelForbidden;
    }
}

tl_enum! {
    /// The counterpart of a message or action.
    pub enum Peer {
        User => crate::types::PeerUser;
        Chat => crate::types::PeerChat;
        Channel => crate::types::PeerChannel;
    }
}

tl_enum! {
    /// A user account, possibly inaccessible.
    pub enum User {
        Empty => crate::types::UserEmpty;
        User => crate::types::User;
    }
}

tl_enum! {
    /// A notification sound choice.
    pub enum NotificationSound {
        empty Default => crate::types::NotificationSoundDefault;
        empty None => crate::types::NotificationSoundNone;
        Local => crate::types::NotificationSoundLocal;
        Ringtone => crate::types::NotificationSoundRingtone;
    }
}

tl_enum! {
    /// A call, in any stage of its lifecycle.
    pub enum PhoneCall {
        Empty => crate::types::PhoneCallEmpty;
        Waiting => crate::types::PhoneCallWaiting;
        Requested => crate::types::PhoneCallRequested;
        Accepted => crate::types::PhoneCallAccepted;
        Call => crate::types::PhoneCall;
        Discarded => crate::types::PhoneCallDiscarded;
    }
}

tl_enum! {
    /// Why a call ended.
    pub enum PhoneCallDiscardReason {
        empty Missed => crate::types::PhoneCallDiscardReasonMissed;
        empty Disconnect => crate::types::PhoneCallDiscardReasonDisconnect;
        empty Hangup => crate::types::PhoneCallDiscardReasonHangup;
        empty Busy => crate::types::PhoneCallDiscardReasonBusy;
    }
}

tl_enum! {
    pub enum PhoneCallProtocol {
        Protocol => crate::types::PhoneCallProtocol;
    }
}

tl_enum! {
    pub enum PhoneConnection {
        Connection => crate::types::PhoneConnection;
    }
}

tl_enum! {
    pub enum InputPhoneCall {
        Call => crate::types::InputPhoneCall;
    }
}

tl_enum! {
    pub enum DataJson {
        Json => crate::types::DataJson;
    }
}

pub mod messages {
    //! Base types in the `messages` namespace.

    use crate::macros::tl_enum;

    tl_enum! {
        /// A list of chats, possibly truncated.
        pub enum Chats {
            Chats => crate::types::messages::Chats;
            Slice => crate::types::messages::ChatsSlice;
        }
    }
}

pub mod account {
    //! Base types in the `account` namespace.

    use crate::macros::tl_enum;

    tl_enum! {
        /// The saved ringtone list, or a marker that it has not changed.
        pub enum SavedRingtones {
            Ringtones => crate::types::account::SavedRingtones;
            empty NotModified => crate::types::account::SavedRingtonesNotModified;
        }
    }
}
