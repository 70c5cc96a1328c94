//! RPC request objects of the `team.raw` schema.
//!
//! On the wire a request is an ordinary boxed object: its identifier
//! followed by its parameters. What makes it a request is purely the
//! calling convention — each struct here implements
//! [`RemoteCall`](crate::RemoteCall), and the (external) dispatcher uses
//! the associated `Return` type to decode the paired reply.

pub mod phone {
    //! Requests in the `phone` namespace.

    use crate::macros::tl_function;

    tl_function! {
        /// Start an outgoing call.
        ///
        /// ```tl
        /// phone.requestCall#42ff96ed user_id:long random_id:int g_a_hash:int256
        ///   protocol:PhoneCallProtocol = PhoneCall
        /// ```
        pub struct RequestCall = 0x42ff96ed -> crate::enums::PhoneCall {
            user_id: i64;
            random_id: i32;
            g_a_hash: [u8; 32];
            protocol: crate::enums::PhoneCallProtocol;
        }
    }

    tl_function! {
        /// Accept an incoming call.
        ///
        /// ```tl
        /// phone.acceptCall#3bd2b4a0 peer:InputPhoneCall g_b:bytes
        ///   protocol:PhoneCallProtocol = PhoneCall
        /// ```
        pub struct AcceptCall = 0x3bd2b4a0 -> crate::enums::PhoneCall {
            peer: crate::enums::InputPhoneCall;
            g_b: Vec<u8>;
            protocol: crate::enums::PhoneCallProtocol;
        }
    }

    tl_function! {
        /// Complete the key exchange and move the call to the active state.
        ///
        /// ```tl
        /// phone.confirmCall#2efe1722 peer:InputPhoneCall g_a:bytes
        ///   key_fingerprint:long protocol:PhoneCallProtocol = PhoneCall
        /// ```
        pub struct ConfirmCall = 0x2efe1722 -> crate::enums::PhoneCall {
            peer: crate::enums::InputPhoneCall;
            g_a: Vec<u8>;
            key_fingerprint: i64;
            protocol: crate::enums::PhoneCallProtocol;
        }
    }

    tl_function! {
        /// Hang up or refuse a call.
        ///
        /// ```tl
        /// phone.discardCall#b2cbc1c0 flags:# video:flags.0?true
        ///   peer:InputPhoneCall duration:int reason:PhoneCallDiscardReason
        ///   connection_id:long = Bool
        /// ```
        pub struct DiscardCall = 0xb2cbc1c0 -> bool {
            flags: #;
            video: flags.0?true;
            peer: crate::enums::InputPhoneCall;
            duration: i32;
            reason: crate::enums::PhoneCallDiscardReason;
            connection_id: i64;
        }
    }

    tl_function! {
        /// Rate a finished call.
        ///
        /// ```tl
        /// phone.setCallRating#59ead627 flags:# user_initiative:flags.0?true
        ///   peer:InputPhoneCall rating:int comment:string = Bool
        /// ```
        pub struct SetCallRating = 0x59ead627 -> bool {
            flags: #;
            user_initiative: flags.0?true;
            peer: crate::enums::InputPhoneCall;
            rating: i32;
            comment: String;
        }
    }

    tl_function! {
        /// Tell the peer our device is ringing.
        ///
        /// ```tl
        /// phone.receivedCall#17d54f61 peer:InputPhoneCall = Bool
        /// ```
        pub struct ReceivedCall = 0x17d54f61 -> bool {
            peer: crate::enums::InputPhoneCall;
        }
    }
}

pub mod messages {
    //! Requests in the `messages` namespace.

    use crate::macros::tl_function;

    tl_function! {
        /// Fetch full information about the given chats.
        ///
        /// ```tl
        /// messages.getChats#49e9528f id:Vector<long> = messages.Chats
        /// ```
        pub struct GetChats = 0x49e9528f -> crate::enums::messages::Chats {
            id: Vec<i64>;
        }
    }
}

pub mod users {
    //! Requests in the `users` namespace.

    use crate::macros::tl_function;

    tl_function! {
        /// Fetch the given users. The response is a bare vector of `User`.
        ///
        /// ```tl
        /// users.getUsers#0d91a548 id:Vector<long> = Vector<User>
        /// ```
        pub struct GetUsers = 0x0d91a548 -> Vec<crate::enums::User> {
            id: Vec<i64>;
        }
    }
}

pub mod account {
    //! Requests in the `account` namespace.

    use crate::macros::tl_function;

    tl_function! {
        /// Save (or remove) a ringtone to the account's saved list.
        ///
        /// ```tl
        /// account.saveRingtone#3dea5b03 id:long unsave:Bool = NotificationSound
        /// ```
        pub struct SaveRingtone = 0x3dea5b03 -> crate::enums::NotificationSound {
            id: i64;
            unsave: bool;
        }
    }

    tl_function! {
        /// Fetch the saved ringtone list if it changed since `hash`.
        ///
        /// ```tl
        /// account.getSavedRingtones#e1902288 hash:long = account.SavedRingtones
        /// ```
        pub struct GetSavedRingtones = 0xe1902288 -> crate::enums::account::SavedRingtones {
            hash: i64;
        }
    }
}
