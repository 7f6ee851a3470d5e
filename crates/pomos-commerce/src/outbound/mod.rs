//! Outbound order hand-off.
//!
//! Pure serialization of a placed order into the canonical WhatsApp
//! message text plus the `wa.me` transport URI the presentation layer
//! opens. The core's contract ends once the URI is returned; actual
//! delivery is the messaging client's concern.

mod encoding;
mod message;

pub use encoding::{decode_component, encode_component};
pub use message::{chat_url, OrderMessage, DESTINATION_PHONE};
