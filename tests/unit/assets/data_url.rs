use super::*;

const HELLO_B64: &str = "aGVsbG8=";

#[test]
fn strips_data_url_prefix() {
    let url = format!("data:image/png;base64,{HELLO_B64}");
    assert_eq!(decode_data_url(&url, 1024).unwrap(), b"hello");
}

#[test]
fn accepts_bare_base64_and_surrounding_whitespace() {
    assert_eq!(decode_data_url(HELLO_B64, 1024).unwrap(), b"hello");
    assert_eq!(
        decode_data_url(&format!("  data:image/jpeg;base64,{HELLO_B64}\n"), 1024).unwrap(),
        b"hello"
    );
}

#[test]
fn data_prefix_without_base64_marker_is_decode_error() {
    let err = decode_data_url("data:image/png,rawbytes", 1024).unwrap_err();
    assert!(matches!(err, SigpasteError::Decode(_)));
}

#[test]
fn invalid_base64_is_decode_error() {
    let err = decode_data_url("data:image/png;base64,@@@not-base64@@@", 1024).unwrap_err();
    assert!(matches!(err, SigpasteError::Decode(_)));
}

#[test]
fn oversize_payload_is_rejected_before_decoding() {
    // 8 chars decode to at most 6 bytes.
    let err = decode_data_url("QUJDREVG", 5).unwrap_err();
    assert!(matches!(err, SigpasteError::InvalidInput(_)));
    assert_eq!(decode_data_url("QUJDREVG", 6).unwrap(), b"ABCDEF");
}

#[test]
fn encode_frames_png_data_url() {
    let url = encode_png_data_url(b"hello");
    assert_eq!(url, format!("data:image/png;base64,{HELLO_B64}"));
    assert_eq!(decode_data_url(&url, 1024).unwrap(), b"hello");
}

#[test]
fn estimate_rounds_up_partial_groups() {
    assert_eq!(estimate_decoded_len(""), 0);
    assert_eq!(estimate_decoded_len("a"), 3);
    assert_eq!(estimate_decoded_len("abcd"), 3);
    assert_eq!(estimate_decoded_len("abcde"), 6);
}
