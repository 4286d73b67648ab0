#![allow(dead_code)]

use hex_literal::hex;
use sbox_analysis::SboxTable;

/// Таблица подстановки AES (FIPS-197)
pub fn aes_sbox() -> SboxTable {
    let bytes = hex!(
        "637c777bf26b6fc53001672bfed7ab76ca82c97dfa5947f0add4a2af9ca472c0"
        "b7fd9326363ff7cc34a5e5f171d8311504c723c31896059a071280e2eb27b275"
        "09832c1a1b6e5aa0523bd6b329e32f8453d100ed20fcb15b6acbbe394a4c58cf"
        "d0efaafb434d338545f9027f503c9fa851a3408f929d38f5bcb6da2110fff3d2"
        "cd0c13ec5f974417c4a77e3d645d197360814fdc222a908846eeb814de5e0bdb"
        "e0323a0a4906245cc2d3ac629195e479e7c8376d8dd54ea96c56f4ea657aae08"
        "ba78252e1ca6b4c6e8dd741f4bbd8b8a703eb5664803f60e613557b986c11d9e"
        "e1f8981169d98e949b1e87e9ce5528df8ca1890dbfe6426841992d0fb054bb16"
    );
    SboxTable::from_bytes(&bytes).expect("AES table is well-formed")
}

/// 4-битная таблица подстановки шифра PRESENT
pub fn present_sbox() -> SboxTable {
    SboxTable::new(vec![0xC, 5, 6, 0xB, 9, 0, 0xA, 0xD, 3, 0xE, 0xF, 8, 4, 7, 1, 2])
        .expect("PRESENT table is well-formed")
}

/// Константная таблица S(x) = c
pub fn constant_sbox(bits: u32, c: u16) -> SboxTable {
    SboxTable::new(vec![c; 1 << bits]).expect("constant table is well-formed")
}
