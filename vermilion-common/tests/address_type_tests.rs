use bitcoin::{PublicKey, ScriptBuf};
use std::str::FromStr;
use std::sync::Once;
use vermilion_common::logging::{self, LogConfig, LogLevel};
use vermilion_common::types::{AddressType, WalletError};

// Initialize once for address type tests
static INIT_LOGGER: Once = Once::new();

fn setup() {
    INIT_LOGGER.call_once(|| {
        let config = LogConfig {
            level: LogLevel::Error,
            log_file: None,
            include_timestamps: false,
            json_format: false,
        };
        let _ = logging::init(&config);
    });
}

// secp256k1 generator point, compressed
const KEY_A: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
// A different valid compressed key
const KEY_B: &str = "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";
// Generator point, uncompressed encoding
const KEY_A_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

fn p2tr_script() -> ScriptBuf {
    let mut bytes = vec![0x51, 0x20];
    bytes.extend_from_slice(&[0xab; 32]);
    ScriptBuf::from(bytes)
}

fn p2wpkh_script() -> ScriptBuf {
    let mut bytes = vec![0x00, 0x14];
    bytes.extend_from_slice(&[0xcd; 20]);
    ScriptBuf::from(bytes)
}

fn p2pkh_script() -> ScriptBuf {
    let mut bytes = vec![0x76, 0xa9, 0x14];
    bytes.extend_from_slice(&[0xef; 20]);
    bytes.extend_from_slice(&[0x88, 0xac]);
    ScriptBuf::from(bytes)
}

fn p2sh_script() -> ScriptBuf {
    let mut bytes = vec![0xa9, 0x14];
    bytes.extend_from_slice(&[0x12; 20]);
    bytes.push(0x87);
    ScriptBuf::from(bytes)
}

/// P2SH script wrapping the P2WPKH program for the given key
fn nested_segwit_script(key_hex: &str) -> ScriptBuf {
    let public_key = PublicKey::from_str(key_hex).unwrap();
    let redeem = ScriptBuf::new_v0_p2wpkh(&public_key.wpubkey_hash().unwrap());
    ScriptBuf::new_p2sh(&redeem.script_hash())
}

#[test]
fn test_classify_p2tr() {
    setup();
    assert_eq!(
        AddressType::from_script(&p2tr_script(), None).unwrap(),
        AddressType::P2tr
    );
}

#[test]
fn test_classify_p2wpkh() {
    setup();
    assert_eq!(
        AddressType::from_script(&p2wpkh_script(), None).unwrap(),
        AddressType::P2wpkh
    );
}

#[test]
fn test_classify_p2pkh() {
    setup();
    assert_eq!(
        AddressType::from_script(&p2pkh_script(), None).unwrap(),
        AddressType::P2pkh
    );
}

#[test]
fn test_classify_p2sh_without_key() {
    setup();
    assert_eq!(
        AddressType::from_script(&p2sh_script(), None).unwrap(),
        AddressType::P2sh
    );
}

#[test]
fn test_nested_segwit_with_matching_key() {
    setup();
    let script = nested_segwit_script(KEY_A);
    assert_eq!(
        AddressType::from_script(&script, Some(KEY_A)).unwrap(),
        AddressType::P2shP2wpkh
    );
}

#[test]
fn test_nested_segwit_with_unrelated_key() {
    setup();
    let script = nested_segwit_script(KEY_A);
    assert_eq!(
        AddressType::from_script(&script, Some(KEY_B)).unwrap(),
        AddressType::P2sh
    );
}

#[test]
fn test_nested_segwit_without_key() {
    setup();
    let script = nested_segwit_script(KEY_A);
    assert_eq!(
        AddressType::from_script(&script, None).unwrap(),
        AddressType::P2sh
    );
}

#[test]
fn test_uncompressed_key_never_matches_nested_segwit() {
    setup();
    // An uncompressed key cannot sit inside a P2WPKH program, so the wrap
    // check must fall back to plain P2SH rather than erroring
    let script = nested_segwit_script(KEY_A);
    assert_eq!(
        AddressType::from_script(&script, Some(KEY_A_UNCOMPRESSED)).unwrap(),
        AddressType::P2sh
    );
}

#[test]
fn test_invalid_public_key_is_rejected() {
    setup();
    let result = AddressType::from_script(&p2sh_script(), Some("not-a-key"));
    assert!(matches!(
        result,
        Err(WalletError::InvalidPublicKey { .. })
    ));
}

#[test]
fn test_unrecognized_script_fails_classification() {
    setup();
    // OP_RETURN output matches none of the spendable templates
    let script = ScriptBuf::from(vec![0x6a, 0x01, 0x00]);
    let result = AddressType::from_script(&script, None);
    assert!(matches!(
        result,
        Err(WalletError::UnsupportedAddressType { .. })
    ));
}

#[test]
fn test_template_priority_order() {
    setup();
    // Each template must win over the checks that come after it
    assert_eq!(
        AddressType::from_script(&p2tr_script(), Some(KEY_A)).unwrap(),
        AddressType::P2tr
    );
    assert_eq!(
        AddressType::from_script(&p2wpkh_script(), Some(KEY_A)).unwrap(),
        AddressType::P2wpkh
    );
}

#[test]
fn test_classification_is_deterministic() {
    setup();
    let script = nested_segwit_script(KEY_A);
    let first = AddressType::from_script(&script, Some(KEY_A)).unwrap();
    let second = AddressType::from_script(&script, Some(KEY_A)).unwrap();
    assert_eq!(first, second);

    let without_key_first = AddressType::from_script(&script, None).unwrap();
    let without_key_second = AddressType::from_script(&script, None).unwrap();
    assert_eq!(without_key_first, without_key_second);
}

#[test]
fn test_wire_names() {
    setup();
    assert_eq!(
        serde_json::to_string(&AddressType::P2shP2wpkh).unwrap(),
        "\"P2SH-P2WPKH\""
    );
    assert_eq!(
        serde_json::to_string(&AddressType::P2tr).unwrap(),
        "\"P2TR\""
    );
    assert_eq!(
        serde_json::from_str::<AddressType>("\"UNKNOWN\"").unwrap(),
        AddressType::Unknown
    );
    assert_eq!(AddressType::P2wpkh.to_string(), "P2WPKH");
}

#[test]
fn test_witness_capability() {
    setup();
    assert!(AddressType::P2tr.spends_with_witness());
    assert!(AddressType::P2wpkh.spends_with_witness());
    assert!(AddressType::P2shP2wpkh.spends_with_witness());
    assert!(AddressType::Unknown.spends_with_witness());
    assert!(!AddressType::P2pkh.spends_with_witness());
    assert!(!AddressType::P2sh.spends_with_witness());
}
