//! Percent-encoding for URI query components.
//!
//! The whole message text rides inside a `?text=` parameter, so every
//! byte outside the RFC 3986 unreserved set is escaped — newlines, emoji
//! and punctuation included. Decoding an encoded string reproduces the
//! input byte-for-byte.

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Percent-encode a string for use as a URI query component.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

/// Decode a percent-encoded component.
///
/// Malformed escapes are passed through literally rather than rejected;
/// this is only used to verify round-trips.
pub fn decode_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let h1 = bytes[i + 1] as char;
            let h2 = bytes[i + 2] as char;
            if let (Some(a), Some(b)) = (h1.to_digit(16), h2.to_digit(16)) {
                out.push(((a << 4) + b) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_pass_through() {
        assert_eq!(encode_component("Abc-123_x.y~z"), "Abc-123_x.y~z");
    }

    #[test]
    fn test_reserved_escaped() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("x=y&z"), "x%3Dy%26z");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
    }

    #[test]
    fn test_multibyte_escaped() {
        // 🍗 is F0 9F 8D 97 in UTF-8.
        assert_eq!(encode_component("🍗"), "%F0%9F%8D%97");
        assert_eq!(encode_component("Belén"), "Bel%C3%A9n");
    }

    #[test]
    fn test_round_trip_exact() {
        let message = "*🍗 NUEVO PEDIDO 🍗*\n📅 Fecha: 12/12/25\nBarrio: Belén\n▪️ 2x Pollo ($108.000)";
        assert_eq!(decode_component(&encode_component(message)), message);
    }

    #[test]
    fn test_decode_malformed_passes_through() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }
}
