// fixtures.rs: commonly used card payloads

use simprobe::Aid;

fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap()
}

pub fn usim_aid() -> Aid {
    "A0000000871002FF86FF4989".parse().unwrap()
}

pub fn visa_rid() -> Aid {
    "A000000003".parse().unwrap()
}

/// Two templates (`A000000087`, `A000000003`) followed by record padding.
pub fn ef_dir_two_apps() -> Vec<u8> {
    bytes("6107A00000008710026105A000000003FFFF")
}

/// EF_DIR whose second record claims more bytes than remain.
pub fn ef_dir_truncated() -> Vec<u8> {
    bytes("6105A0000000876120A000000003")
}

/// Menu with items `Test` (id 1) and `ABC` (id 2).
pub fn menu_two_entries() -> Vec<u8> {
    bytes("0201010454657374020203414243")
}

/// Menu-like buffer whose count byte is out of range.
pub fn menu_garbage() -> Vec<u8> {
    bytes("FF00E4BDA04D656E7501027F4F4B21")
}

pub fn iccid() -> Vec<u8> {
    bytes("98940000000000000010")
}
