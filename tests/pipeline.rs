use std::fs;

use bmpfilter::pipeline::{process_files, read_bmp, write_bmp};
use bmpfilter::*;
use enough::Unstoppable;

fn vertical_bar(w: u32, h: u32) -> Image {
    let mut img = Image::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let px = if x >= w / 3 && x < 2 * w / 3 {
                [30, 200, 250]
            } else {
                [20, 10, 5]
            };
            img.set_pixel(x, y, px);
        }
    }
    img
}

#[test]
fn process_files_writes_both_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let edges_path = dir.path().join("edges.bmp");
    let equalized_path = dir.path().join("equalized.bmp");

    let img = vertical_bar(11, 7);
    write_bmp(&input, &img).unwrap();

    let output = process_files(&input, &edges_path, &equalized_path).unwrap();

    let edges = read_bmp(&edges_path).unwrap();
    let equalized = read_bmp(&equalized_path).unwrap();
    assert_eq!(edges, output.edges);
    assert_eq!(equalized, output.equalized);
    assert_eq!((edges.width(), edges.height()), (11, 7));

    // bar edges at columns 3 and 7 light up, the bar interior does not
    assert_eq!(edges.pixel(3, 3), [255, 255, 255]);
    assert_eq!(edges.pixel(5, 3), [0, 0, 0]);
    assert_eq!(edges.pixel(0, 3), [0, 0, 0]);

    let bytes = fs::read(&equalized_path).unwrap();
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(bytes.len(), 54 + equalized.row_stride() * 7);
}

#[test]
fn unsupported_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let edges_path = dir.path().join("edges.bmp");
    let equalized_path = dir.path().join("equalized.bmp");

    let mut data = encode_bmp(&vertical_bar(4, 4), Unstoppable).unwrap();
    data[28..30].copy_from_slice(&8u16.to_le_bytes());
    fs::write(&input, data).unwrap();

    let err = process_files(&input, &edges_path, &equalized_path).unwrap_err();
    assert!(err.is_unsupported(), "{err}");
    assert!(!edges_path.exists());
    assert!(!equalized_path.exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = process_files(
        dir.path().join("nope.bmp"),
        dir.path().join("a.bmp"),
        dir.path().join("b.bmp"),
    )
    .unwrap_err();
    assert!(matches!(err, BitmapError::Io(_)), "{err}");
}

#[test]
fn failed_second_write_keeps_first_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let edges_path = dir.path().join("edges.bmp");
    let equalized_path = dir.path().join("missing-dir").join("equalized.bmp");

    write_bmp(&input, &vertical_bar(6, 6)).unwrap();
    let err = process_files(&input, &edges_path, &equalized_path).unwrap_err();
    assert!(matches!(err, BitmapError::Io(_)));

    let edges = read_bmp(&edges_path).unwrap();
    assert_eq!((edges.width(), edges.height()), (6, 6));
}
