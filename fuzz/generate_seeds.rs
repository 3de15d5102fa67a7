#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp24(width: i32, height: i32) -> Vec<u8> {
    let stride = ((3 * width + 3) & !3) as usize;
    let data_size = stride * height as usize;
    let mut bmp = vec![0u8; 54 + data_size];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&((54 + data_size) as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&(data_size as u32).to_le_bytes());
    bmp[38..42].copy_from_slice(&3780i32.to_le_bytes());
    bmp[42..46].copy_from_slice(&3780i32.to_le_bytes());
    for (i, b) in bmp[54..].iter_mut().enumerate() {
        *b = (i * 37) as u8;
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp24(1, 1)).unwrap();
    fs::write(format!("{dir}/bmp_3x2.bmp"), bmp24(3, 2)).unwrap();
    fs::write(format!("{dir}/bmp_8x8.bmp"), bmp24(8, 8)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut top_down = bmp24(2, 2);
    top_down[22..26].copy_from_slice(&(-2i32).to_le_bytes());
    fs::write(format!("{dir}/top_down.bmp"), top_down).unwrap();
    let mut truncated = bmp24(5, 5);
    truncated.truncate(70);
    fs::write(format!("{dir}/truncated.bmp"), truncated).unwrap();

    println!("Generated seed corpus in {dir}/");
}
