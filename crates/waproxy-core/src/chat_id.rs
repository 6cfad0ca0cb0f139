//! Chat identifier normalization.
//!
//! The gateway addresses chats by JID-like strings: direct contacts are
//! `<phone>@c.us`, groups are `<id>@g.us`. Users type the bare identifier.

/// Suffix for one-to-one chats.
pub const DIRECT_SUFFIX: &str = "@c.us";

/// Suffix for group chats.
pub const GROUP_SUFFIX: &str = "@g.us";

/// Append the chat suffix matching the shape of `raw`.
///
/// Anything that parses as a base-10 `i64` is a phone number and gets
/// [`DIRECT_SUFFIX`]; everything else, including the empty string, gets
/// [`GROUP_SUFFIX`].
pub fn normalize_chat_id(raw: &str) -> String {
    if is_direct(raw) {
        format!("{raw}{DIRECT_SUFFIX}")
    } else {
        format!("{raw}{GROUP_SUFFIX}")
    }
}

fn is_direct(raw: &str) -> bool {
    raw.parse::<i64>().is_ok()
}
