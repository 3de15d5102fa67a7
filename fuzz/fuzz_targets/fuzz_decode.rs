#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probing and full decode must never panic
    let _ = bmpfilter::probe_bmp(data);
    let Ok(image) = bmpfilter::decode_bmp(data, enough::Unstoppable) else {
        return;
    };

    // Neither must the filters on anything that decodes
    let _ = bmpfilter::pipeline::run(&image);
});
