//! Concrete constructors (bare types) of the `team.raw` schema.
//!
//! A bare type serializes its fields only; the 4-byte constructor
//! identifier is written by whichever boxed context contains it (a base
//! type enum, a request object, or the generic [`crate::registry`]).
//! Namespaced definitions live in nested modules, one per TL namespace.

use crate::macros::tl_type;

// ─── Chat ────────────────────────────────────────────────────────────────────

tl_type! {
    /// A group that no longer exists or that the session cannot see.
    ///
    /// ```tl
    /// chatEmpty#29562865 id:long = Chat
    /// ```
    pub struct ChatEmpty = 0x29562865 {
        id: i64;
    }
}

tl_type! {
    /// A basic group.
    ///
    /// ```tl
    /// chat#41cbf256 flags:# call_active:flags.1?true id:long title:string
    ///   participants_count:int date:int version:int = Chat
    /// ```
    pub struct Chat = 0x41cbf256 {
        flags: #;
        call_active: flags.1?true;
        id: i64;
        title: String;
        participants_count: i32;
        date: i32;
        version: i32;
    }
}

tl_type! {
    /// A basic group the session was banned from.
    ///
    /// ```tl
    /// chatForbidden#6592a1a7 id:long title:string = Chat
    /// ```
    pub struct ChatForbidden = 0x6592a1a7 {
        id: i64;
        title: String;
    }
}

tl_type! {
    /// A channel or supergroup.
    ///
    /// ```tl
    /// channel#8261ac61 flags:# broadcast:flags.5?true megagroup:flags.8?true
    ///   id:long access_hash:flags.13?long title:string username:flags.6?string
    ///   date:int = Chat
    /// ```
    pub struct Channel = 0x8261ac61 {
        flags: #;
        broadcast: flags.5?true;
        megagroup: flags.8?true;
        id: i64;
        access_hash: flags.13?i64;
        title: String;
        username: flags.6?String;
        date: i32;
    }
}

tl_type! {
    /// A channel the session was banned from.
    ///
    /// ```tl
    /// channelForbidden#17d493d5 flags:# broadcast:flags.5?true
    ///   megagroup:flags.8?true id:long access_hash:long title:string
    ///   until_date:flags.16?int = Chat
    /// ```
    pub struct ChannelForbidden = 0x17d493d5 {
        flags: #;
        broadcast: flags.5?true;
        megagroup: flags.8?true;
        id: i64;
        access_hash: i64;
        title: String;
        until_date: flags.16?i32;
    }
}

// ─── Peer ────────────────────────────────────────────────────────────────────

tl_type! {
    /// ```tl
    /// peerUser#59511722 user_id:long = Peer
    /// ```
    pub struct PeerUser = 0x59511722 {
        user_id: i64;
    }
}

tl_type! {
    /// ```tl
    /// peerChat#36c6019a chat_id:long = Peer
    /// ```
    pub struct PeerChat = 0x36c6019a {
        chat_id: i64;
    }
}

tl_type! {
    /// ```tl
    /// peerChannel#a2a5371e channel_id:long = Peer
    /// ```
    pub struct PeerChannel = 0xa2a5371e {
        channel_id: i64;
    }
}

// ─── User ────────────────────────────────────────────────────────────────────

tl_type! {
    /// A deleted or otherwise inaccessible account.
    ///
    /// ```tl
    /// userEmpty#d3bc4b7a id:long = User
    /// ```
    pub struct UserEmpty = 0xd3bc4b7a {
        id: i64;
    }
}

tl_type! {
    /// A user account.
    ///
    /// ```tl
    /// user#215c4438 flags:# bot:flags.14?true verified:flags.17?true id:long
    ///   access_hash:flags.0?long first_name:flags.1?string
    ///   last_name:flags.2?string username:flags.3?string
    ///   phone:flags.4?string = User
    /// ```
    pub struct User = 0x215c4438 {
        flags: #;
        bot: flags.14?true;
        verified: flags.17?true;
        id: i64;
        access_hash: flags.0?i64;
        first_name: flags.1?String;
        last_name: flags.2?String;
        username: flags.3?String;
        phone: flags.4?String;
    }
}

// ─── NotificationSound ───────────────────────────────────────────────────────

tl_type! {
    /// The account-wide default sound.
    ///
    /// ```tl
    /// notificationSoundDefault#1fb33026 = NotificationSound
    /// ```
    pub struct NotificationSoundDefault = 0x1fb33026 {}
}

tl_type! {
    /// No sound at all.
    ///
    /// ```tl
    /// notificationSoundNone#6f0c34df = NotificationSound
    /// ```
    pub struct NotificationSoundNone = 0x6f0c34df {}
}

tl_type! {
    /// A sound file local to the client.
    ///
    /// ```tl
    /// notificationSoundLocal#830b9ae4 title:string data:string = NotificationSound
    /// ```
    pub struct NotificationSoundLocal = 0x830b9ae4 {
        title: String;
        data: String;
    }
}

tl_type! {
    /// A previously uploaded ringtone, referenced by id.
    ///
    /// ```tl
    /// notificationSoundRingtone#ff6c8049 id:long = NotificationSound
    /// ```
    pub struct NotificationSoundRingtone = 0xff6c8049 {
        id: i64;
    }
}

// ─── PhoneCall ───────────────────────────────────────────────────────────────

tl_type! {
    /// ```tl
    /// phoneCallEmpty#5366c915 id:long = PhoneCall
    /// ```
    pub struct PhoneCallEmpty = 0x5366c915 {
        id: i64;
    }
}

tl_type! {
    /// An outgoing call not yet acknowledged by the callee's device.
    ///
    /// ```tl
    /// phoneCallWaiting#c5226f17 flags:# video:flags.6?true id:long
    ///   access_hash:long date:int admin_id:long participant_id:long
    ///   protocol:PhoneCallProtocol receive_date:flags.0?int = PhoneCall
    /// ```
    pub struct PhoneCallWaiting = 0xc5226f17 {
        flags: #;
        video: flags.6?true;
        id: i64;
        access_hash: i64;
        date: i32;
        admin_id: i64;
        participant_id: i64;
        protocol: crate::enums::PhoneCallProtocol;
        receive_date: flags.0?i32;
    }
}

tl_type! {
    /// An incoming call, carrying the commitment to the caller's DH value.
    ///
    /// ```tl
    /// phoneCallRequested#14b0ed0c flags:# video:flags.6?true id:long
    ///   access_hash:long date:int admin_id:long participant_id:long
    ///   g_a_hash:int256 protocol:PhoneCallProtocol = PhoneCall
    /// ```
    pub struct PhoneCallRequested = 0x14b0ed0c {
        flags: #;
        video: flags.6?true;
        id: i64;
        access_hash: i64;
        date: i32;
        admin_id: i64;
        participant_id: i64;
        g_a_hash: [u8; 32];
        protocol: crate::enums::PhoneCallProtocol;
    }
}

tl_type! {
    /// A call the callee accepted; key exchange is still in flight.
    ///
    /// ```tl
    /// phoneCallAccepted#3660c311 flags:# video:flags.6?true id:long
    ///   access_hash:long date:int admin_id:long participant_id:long
    ///   g_b:bytes protocol:PhoneCallProtocol = PhoneCall
    /// ```
    pub struct PhoneCallAccepted = 0x3660c311 {
        flags: #;
        video: flags.6?true;
        id: i64;
        access_hash: i64;
        date: i32;
        admin_id: i64;
        participant_id: i64;
        g_b: Vec<u8>;
        protocol: crate::enums::PhoneCallProtocol;
    }
}

tl_type! {
    /// An established call.
    ///
    /// ```tl
    /// phoneCall#967f7c67 flags:# p2p_allowed:flags.5?true video:flags.6?true
    ///   id:long access_hash:long date:int admin_id:long participant_id:long
    ///   g_a_or_b:bytes key_fingerprint:long protocol:PhoneCallProtocol
    ///   connections:Vector<PhoneConnection> start_date:int = PhoneCall
    /// ```
    pub struct PhoneCall = 0x967f7c67 {
        flags: #;
        p2p_allowed: flags.5?true;
        video: flags.6?true;
        id: i64;
        access_hash: i64;
        date: i32;
        admin_id: i64;
        participant_id: i64;
        g_a_or_b: Vec<u8>;
        key_fingerprint: i64;
        protocol: crate::enums::PhoneCallProtocol;
        connections: Vec<crate::enums::PhoneConnection>;
        start_date: i32;
    }
}

tl_type! {
    /// A finished call.
    ///
    /// ```tl
    /// phoneCallDiscarded#50ca4de1 flags:# need_rating:flags.2?true
    ///   need_debug:flags.3?true video:flags.6?true id:long
    ///   reason:flags.0?PhoneCallDiscardReason duration:flags.1?int = PhoneCall
    /// ```
    pub struct PhoneCallDiscarded = 0x50ca4de1 {
        flags: #;
        need_rating: flags.2?true;
        need_debug: flags.3?true;
        video: flags.6?true;
        id: i64;
        reason: flags.0?crate::enums::PhoneCallDiscardReason;
        duration: flags.1?i32;
    }
}

// ─── PhoneCallDiscardReason ──────────────────────────────────────────────────

tl_type! {
    /// ```tl
    /// phoneCallDiscardReasonMissed#85e42301 = PhoneCallDiscardReason
    /// ```
    pub struct PhoneCallDiscardReasonMissed = 0x85e42301 {}
}

tl_type! {
    /// ```tl
    /// phoneCallDiscardReasonDisconnect#e095c1a0 = PhoneCallDiscardReason
    /// ```
    pub struct PhoneCallDiscardReasonDisconnect = 0xe095c1a0 {}
}

tl_type! {
    /// ```tl
    /// phoneCallDiscardReasonHangup#57adc690 = PhoneCallDiscardReason
    /// ```
    pub struct PhoneCallDiscardReasonHangup = 0x57adc690 {}
}

tl_type! {
    /// ```tl
    /// phoneCallDiscardReasonBusy#faf7e8c9 = PhoneCallDiscardReason
    /// ```
    pub struct PhoneCallDiscardReasonBusy = 0xfaf7e8c9 {}
}

// ─── Call plumbing ───────────────────────────────────────────────────────────

tl_type! {
    /// Layer range and transport capabilities negotiated for a call.
    ///
    /// ```tl
    /// phoneCallProtocol#fc878fc8 flags:# udp_p2p:flags.0?true
    ///   udp_reflector:flags.1?true min_layer:int max_layer:int
    ///   library_versions:Vector<string> = PhoneCallProtocol
    /// ```
    pub struct PhoneCallProtocol = 0xfc878fc8 {
        flags: #;
        udp_p2p: flags.0?true;
        udp_reflector: flags.1?true;
        min_layer: i32;
        max_layer: i32;
        library_versions: Vec<String>;
    }
}

tl_type! {
    /// One relay endpoint usable for a call.
    ///
    /// ```tl
    /// phoneConnection#9cc123c7 flags:# tcp:flags.0?true id:long ip:string
    ///   ipv6:string port:int peer_tag:bytes = PhoneConnection
    /// ```
    pub struct PhoneConnection = 0x9cc123c7 {
        flags: #;
        tcp: flags.0?true;
        id: i64;
        ip: String;
        ipv6: String;
        port: i32;
        peer_tag: Vec<u8>;
    }
}

tl_type! {
    /// ```tl
    /// inputPhoneCall#1e36fded id:long access_hash:long = InputPhoneCall
    /// ```
    pub struct InputPhoneCall = 0x1e36fded {
        id: i64;
        access_hash: i64;
    }
}

tl_type! {
    /// ```tl
    /// dataJSON#7d748d04 data:string = DataJSON
    /// ```
    pub struct DataJson = 0x7d748d04 {
        data: String;
    }
}

// ─── messages ────────────────────────────────────────────────────────────────

pub mod messages {
    //! Constructors in the `messages` namespace.

    use crate::macros::tl_type;

    tl_type! {
        /// The full list of requested chats.
        ///
        /// ```tl
        /// messages.chats#64ff9fd5 chats:Vector<Chat> = messages.Chats
        /// ```
        pub struct Chats = 0x64ff9fd5 {
            chats: Vec<crate::enums::Chat>;
        }
    }

    tl_type! {
        /// A partial chat list; `count` is the total available server-side.
        ///
        /// ```tl
        /// messages.chatsSlice#9cd81144 count:int chats:Vector<Chat> = messages.Chats
        /// ```
        pub struct ChatsSlice = 0x9cd81144 {
            count: i32;
            chats: Vec<crate::enums::Chat>;
        }
    }
}

// ─── account ─────────────────────────────────────────────────────────────────

pub mod account {
    //! Constructors in the `account` namespace.

    use crate::macros::tl_type;

    tl_type! {
        /// ```tl
        /// account.savedRingtones#c1e92cc5 hash:long
        ///   ringtones:Vector<NotificationSound> = account.SavedRingtones
        /// ```
        pub struct SavedRingtones = 0xc1e92cc5 {
            hash: i64;
            ringtones: Vec<crate::enums::NotificationSound>;
        }
    }

    tl_type! {
        /// ```tl
        /// account.savedRingtonesNotModified#b7263f6d = account.SavedRingtones
        /// ```
        pub struct SavedRingtonesNotModified = 0xb7263f6d {}
    }
}
