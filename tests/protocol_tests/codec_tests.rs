//! Codec Tests
//!
//! Tests for hex payload encoding/decoding.

use dappnode::error::DappError;
use dappnode::protocol::codec::{decode, decode_bytes, encode, encode_bytes};
use proptest::prelude::*;

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_known_values() {
    assert_eq!(encode("hello world"), "0x68656c6c6f20776f726c64");
    assert_eq!(encode("GO TEAM"), "0x474f205445414d");
}

#[test]
fn test_encode_multibyte_text() {
    assert_eq!(encode("é"), "0xc3a9");
    assert_eq!(encode_bytes(&[0x00, 0xff]), "0x00ff");
}

#[test]
fn test_encode_empty() {
    assert_eq!(encode(""), "0x");
    assert_eq!(decode("0x").unwrap(), "");
    assert_eq!(decode("").unwrap(), "");
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_mixed_case() {
    assert_eq!(decode("0x476F207465616d").unwrap(), "Go team");
}

#[test]
fn test_decode_rejects_non_hex_characters() {
    for input in ["0xgg", "0x6g", "zz", "0x 68", "0x68 "] {
        let result = decode(input);
        assert!(
            matches!(result, Err(DappError::Decode(_))),
            "{input:?} should fail to decode"
        );
    }
}

#[test]
fn test_decode_rejects_odd_length() {
    assert!(matches!(decode("0x686"), Err(DappError::Decode(_))));
    assert!(matches!(decode_bytes("f"), Err(DappError::Decode(_))));
}

#[test]
fn test_decode_rejects_invalid_utf8() {
    let err = decode("0xc328").unwrap_err();
    assert!(matches!(err, DappError::Utf8(_)));
    assert!(err.is_input_error());
}

#[test]
fn test_prefix_only_stripped_once() {
    // "0x0x41" leaves "0x41" which contains 'x'
    assert!(decode("0x0x41").is_err());
}

#[test]
fn test_x_only_tolerated_as_leading_prefix() {
    assert_eq!(decode("0x41").unwrap(), "A");
    for input in ["x41", "4x1", "41x0", "00x41", "0x4x"] {
        assert!(
            matches!(decode(input), Err(DappError::Decode(_))),
            "{input:?} should fail to decode"
        );
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_roundtrip(text in ".*") {
        prop_assert_eq!(decode(&encode(&text)).unwrap(), text);
    }

    #[test]
    fn prop_uppercase_input_accepted(text in ".*") {
        let upper = encode(&text).to_uppercase().replacen("0X", "0x", 1);
        prop_assert_eq!(decode(&upper).unwrap(), text);
    }

    #[test]
    fn prop_non_hex_char_fails(prefix in "[0-9a-f]{0,8}", bad in "[g-wG-W]") {
        let input = format!("{}{}{}", prefix, bad, "0");
        let input = if input.len() % 2 == 0 { input } else { format!("{}0", input) };
        prop_assert!(decode(&input).is_err());
    }
}
