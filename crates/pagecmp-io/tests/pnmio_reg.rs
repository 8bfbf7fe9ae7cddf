//! Pixel-dump I/O regression test
//!
//! Text and binary dumps of the same page must parse to identical matrices,
//! and matrices written back out as PPM and PNG must read back unchanged.

use pagecmp_core::Color;
use pagecmp_io::{ImageFormat, PnmVariant, read_pnm_mem, write_image};
use pagecmp_test::{RegParams, fixtures, load_image, regout_dir};

#[test]
fn pnmio_reg() {
    let mut rp = RegParams::new("pnmio");
    let outdir = regout_dir();

    let page = fixtures::pattern(12, 9);

    // Test 1: P3 and P6 with max 255 parse identically
    let from_text = read_pnm_mem(&fixtures::ascii_of(&page)).expect("parse P3");
    let from_binary = read_pnm_mem(&fixtures::binary_of(&page)).expect("parse P6");
    rp.compare_matrices(&page, &from_text);
    rp.compare_matrices(&from_text, &from_binary);
    rp.compare_strings(
        from_text.digest().unwrap().as_bytes(),
        from_binary.digest().unwrap().as_bytes(),
    );

    // Test 2: samples are rescaled from the declared maximum
    let dump = fixtures::ppm_ascii(2, 1, 15, &[0, 15, 7, 15, 0, 1]);
    let scaled = read_pnm_mem(&dump).expect("parse max 15");
    rp.compare_values(
        1.0,
        (scaled.get_pixel(0, 0) == Some(Color::new(0, 255, 119))) as u8 as f64,
        0.0,
    );
    rp.compare_values(
        1.0,
        (scaled.get_pixel(1, 0) == Some(Color::new(255, 0, 17))) as u8 as f64,
        0.0,
    );

    // Test 3: write both variants and read them back
    for variant in [PnmVariant::Ascii, PnmVariant::Binary] {
        let mut buf = Vec::new();
        pagecmp_io::pnm::write_pnm(&page, &mut buf, variant).expect("write PNM");
        rp.compare_strings(variant.tag().as_bytes(), &buf[..2]);
        let back = read_pnm_mem(&buf).expect("reread PNM");
        rp.compare_matrices(&page, &back);
    }

    // Test 4: file I/O through format detection
    let ppm_path = format!("{}/pnmio_pattern.ppm", outdir);
    write_image(&page, &ppm_path, ImageFormat::Pnm).expect("write ppm file");
    let back = load_image(&ppm_path).expect("read ppm file");
    rp.compare_matrices(&page, &back);

    let png_path = format!("{}/pnmio_pattern.png", outdir);
    write_image(&page, &png_path, ImageFormat::Png).expect("write png file");
    let back = load_image(&png_path).expect("read png file");
    rp.compare_matrices(&page, &back);

    // Test 5: golden check of the binary dump
    rp.write_data_and_check(&fixtures::binary_of(&page), "ppm")
        .expect("check ppm golden");

    assert!(rp.cleanup(), "pnmio regression test failed");
}

#[test]
fn test_huge_declared_size_is_format_error() {
    for dump in [
        &b"P3\n200000 200000\n255\n1 2 3\n"[..],
        b"P6\n200000 200000\n255\nabc",
        b"P6\n65535 65535\n255\n",
    ] {
        let err = read_pnm_mem(dump).unwrap_err();
        assert!(err.is_format_error(), "{err}");
    }
}
