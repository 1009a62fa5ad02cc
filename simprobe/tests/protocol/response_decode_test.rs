use simprobe::protocol::{ResponseApdu, Status};
use simprobe::{Error, StatusWord};

#[test]
fn split_data_and_status() {
    let resp = ResponseApdu::from_bytes(&[0x62, 0x03, 0x82, 0x01, 0x21, 0x90, 0x00]).unwrap();
    assert_eq!(resp.data, vec![0x62, 0x03, 0x82, 0x01, 0x21]);
    assert_eq!(resp.status(), Status::Success);
    assert_eq!(resp.status_word(), StatusWord::SUCCESS);
}

#[test]
fn status_only_responses() {
    let resp = ResponseApdu::from_bytes(&[0x6C, 0x1A]).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.status(), Status::WrongLength(0x1A));

    let resp = ResponseApdu::from_bytes(&[0x61, 0x10]).unwrap();
    assert_eq!(resp.status(), Status::Other(0x61, 0x10));
    assert_eq!(resp.status_word().more_data(), Some(0x10));
}

#[test]
fn short_response_is_invalid_length() {
    assert!(matches!(
        ResponseApdu::from_bytes(&[0x90]),
        Err(Error::InvalidLength {
            expected: 2,
            actual: 1
        })
    ));
}
