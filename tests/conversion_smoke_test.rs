//! End-to-end checks: image -> header/grid -> image on real files.

use std::{fs, path::Path};

use image::{GrayImage, ImageBuffer};
use inr_pixels::{
    format::{parse_rows, reshape},
    run_decode, run_encode, Cleanup, DecodeOptions, EncodeOptions, Logger, OutputFormat,
};

#[test]
fn header_values_decode_back_within_one_level() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("img.png");
    let output = dir.path().join("img.hpp");
    let pixels: Vec<u8> = (0..=255u16).map(|v| (v * 7 % 256) as u8).collect();
    write_gray_png(&input, 16, 16, &pixels);

    let mut logger = Logger::console("img2hpp");
    run_encode(
        &mut logger,
        &EncodeOptions {
            input,
            output: output.clone(),
            format: OutputFormat::Header,
        },
    )
    .expect("encode");

    let header = fs::read_to_string(&output).expect("read header");
    assert!(header.contains("const int width = 16, height = 16;"));

    // Strip the C++ wrapping; each "\n\t" row keeps its trailing comma.
    let body = header
        .split_once("expected = {")
        .and_then(|(_, rest)| rest.split_once("};"))
        .map(|(body, _)| body.replace('\t', ""))
        .expect("expected list");
    let rows = parse_rows(&body).expect("parse header body");
    assert_eq!(rows.len(), 16);
    let decoded = reshape(&rows).expect("reshape");

    assert_eq!(decoded.pixels().len(), pixels.len());
    for (got, want) in decoded.pixels().iter().zip(&pixels) {
        assert!(got.abs_diff(*want) <= 1, "pixel {got} vs {want}");
    }
}

#[test]
fn grid_output_feeds_txt2png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("img.png");
    let name = dir.path().join("res");
    let pixels: Vec<u8> = (0..12).map(|v| v * 20).collect();
    write_gray_png(&input, 4, 3, &pixels);

    run_encode(
        &mut Logger::console("img2hpp"),
        &EncodeOptions {
            input,
            output: name.with_extension("txt"),
            format: OutputFormat::Grid { precision: 10 },
        },
    )
    .expect("encode grid");

    let report =
        run_decode(&mut Logger::console("txt2png"), &DecodeOptions::new(&name)).expect("decode");

    assert!(matches!(report.cleanup, Cleanup::Deleted));
    assert!(!name.with_extension("txt").exists());
    let img = image::open(&report.image).expect("open png").to_luma8();
    assert_eq!((img.width(), img.height()), (4, 3));
    assert_eq!(img.into_raw(), pixels);
}

#[test]
fn nonexistent_text_writes_no_image() {
    let dir = tempfile::tempdir().expect("tempdir");
    let name = dir.path().join("nothing");

    let err = run_decode(&mut Logger::console("txt2png"), &DecodeOptions::new(&name))
        .expect_err("missing text");

    assert_eq!(err.kind(), inr_pixels::ErrorKind::Read);
    assert!(!name.with_extension("png").exists());
}

fn write_gray_png(path: &Path, width: u32, height: u32, pixels: &[u8]) {
    let img: GrayImage =
        ImageBuffer::from_vec(width, height, pixels.to_vec()).expect("build image");
    img.save(path).expect("save test image");
}
