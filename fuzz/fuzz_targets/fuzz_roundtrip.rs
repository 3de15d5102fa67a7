#![no_main]
use libfuzzer_sys::fuzz_target;
use bmpfilter::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce an identical image
    let Ok(decoded) = decode_bmp(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = encode_bmp(&decoded, enough::Unstoppable).expect("decoded image must encode");
    let Ok(decoded2) = decode_bmp(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
});
