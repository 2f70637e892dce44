//! System resource identifiers.
//!
//! A resource id is a `bytes32` laid out as
//! `type (2 bytes) ‖ namespace (14 bytes) ‖ name (16 bytes)`, each part
//! right-padded with zero bytes.

/// Resource type tag for systems.
pub const RESOURCE_SYSTEM: [u8; 2] = *b"sy";

/// Maximum namespace length in bytes.
pub const NAMESPACE_BYTES: usize = 14;

/// Maximum resource name length in bytes.
pub const NAME_BYTES: usize = 16;

/// Encode a system resource id as `0x` followed by 64 lower-case hex digits.
///
/// Parts longer than their slot are truncated, matching the world's encoding.
/// Callers validate lengths beforehand.
pub fn encode_system_id(namespace: &str, name: &str) -> String {
    let mut bytes = [0u8; 32];
    bytes[..2].copy_from_slice(&RESOURCE_SYSTEM);
    copy_padded(&mut bytes[2..2 + NAMESPACE_BYTES], namespace.as_bytes());
    copy_padded(&mut bytes[2 + NAMESPACE_BYTES..], name.as_bytes());

    format!("0x{}", hex::encode(bytes))
}

fn copy_padded(slot: &mut [u8], value: &[u8]) {
    let len = value.len().min(slot.len());
    slot[..len].copy_from_slice(&value[..len]);
}

/// Returns true if `value` is `0x` followed by a hex-encoded `bytes32`.
pub fn is_valid_resource_id(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .and_then(|digits| hex::decode(digits).ok())
        .is_some_and(|bytes| bytes.len() == 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_system_id() {
        assert_eq!(
            encode_system_id("app", "MoveSystem"),
            "0x737961707000000000000000000000004d6f766553797374656d000000000000"
        );
    }

    #[test]
    fn test_encode_root_namespace() {
        assert_eq!(
            encode_system_id("", "AccessSystem"),
            "0x7379000000000000000000000000000041636365737353797374656d00000000"
        );
    }

    #[test]
    fn test_encode_full_width_parts() {
        let id = encode_system_id("abcdefghijklmn", "ABCDEFGHIJKLMNOP");
        assert_eq!(id.len(), 66);
        assert!(id.ends_with("4142434445464748494a4b4c4d4e4f50"));
        assert!(id.starts_with("0x73796162636465666768696a6b6c6d6e"));
    }

    #[test]
    fn test_is_valid_resource_id() {
        assert!(is_valid_resource_id(&encode_system_id("app", "MoveSystem")));
        assert!(is_valid_resource_id(&format!("0x{}", "AB".repeat(32))));
        assert!(!is_valid_resource_id("0x1234"));
        assert!(!is_valid_resource_id(&"00".repeat(33)));
        assert!(!is_valid_resource_id(&format!("0x{}", "zz".repeat(32))));
    }

    #[test]
    fn test_is_valid_resource_id_rejects_odd_or_long_digits() {
        assert!(!is_valid_resource_id(&format!("0x{}0", "00".repeat(32))));
        assert!(!is_valid_resource_id(&format!("0x{}", "00".repeat(33))));
        assert!(!is_valid_resource_id("0x"));
    }

    #[test]
    fn test_encoded_id_decodes_to_layout() {
        let id = encode_system_id("app", "MoveSystem");
        let bytes = hex::decode(&id[2..]).unwrap();
        assert_eq!(&bytes[..2], &RESOURCE_SYSTEM);
        assert_eq!(&bytes[2..5], b"app");
        assert!(bytes[5..2 + NAMESPACE_BYTES].iter().all(|b| *b == 0));
        assert_eq!(&bytes[2 + NAMESPACE_BYTES..2 + NAMESPACE_BYTES + 10], b"MoveSystem");
    }
}
