use simprobe::protocol::{self, Command, CommandApdu};
use simprobe::{Error, Fid};

#[test]
fn select_usim_by_name() {
    let aid: simprobe::Aid = "A0000000871002".parse().unwrap();
    let bytes = protocol::select_by_name(aid.as_bytes()).unwrap().encode();
    assert_eq!(
        bytes,
        vec![0x00, 0xA4, 0x04, 0x00, 0x07, 0xA0, 0x00, 0x00, 0x00, 0x87, 0x10, 0x02]
    );
    assert_eq!(Command::SelectByName { aid }.encode().unwrap(), bytes);
}

#[test]
fn select_ef_menu_by_id_has_no_le() {
    let bytes = Command::SelectById { fid: Fid::EF_MENU }.encode().unwrap();
    assert_eq!(bytes, vec![0x00, 0xA4, 0x00, 0x00, 0x02, 0x6F, 0x30]);
}

#[test]
fn read_binary_and_get_data_headers() {
    assert_eq!(
        protocol::read_binary(0x0102, 0).unwrap().encode(),
        vec![0x00, 0xB0, 0x01, 0x02, 0x00]
    );
    assert_eq!(
        protocol::get_response(0x1C).unwrap().encode(),
        vec![0x00, 0xC0, 0x00, 0x00, 0x1C]
    );
    assert_eq!(
        protocol::get_data(0x0042).encode(),
        vec![0x00, 0xCA, 0x00, 0x42, 0x00]
    );
}

#[test]
fn bounds_are_enforced() {
    assert!(matches!(
        CommandApdu::new(0x00, 0xA4, 0x04, 0x00).data(vec![0u8; 256]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        CommandApdu::new(0x00, 0xB0, 0x00, 0x00).le(257),
        Err(Error::InvalidArgument(_))
    ));
    assert!(protocol::read_binary(0x8000, 0).is_err());
    assert!(protocol::select_by_name(&[0xA0; 4]).is_err());
}
