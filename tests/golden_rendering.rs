use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use pwa_glyphs::rendering::{House, PawPrint};
use pwa_glyphs::{compose_icon, compose_splash, Canvas, Glyph, Palette};
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn digest(png: &[u8]) -> String {
    hex::encode(Sha256::digest(png))
}

fn icon(size: u32, maskable: bool, glyph: &dyn Glyph) -> Canvas {
    compose_icon(size, maskable, glyph, &Palette::default()).expect("render icon")
}

/// Decode the encoded PNG so the comparison covers the encoder too.
fn decoded(canvas: &Canvas) -> RgbaImage {
    let png = canvas.encode_png().expect("encode png");
    image::load_from_memory(&png).expect("decode png").to_rgba8()
}

/// One character per pixel: `p` primary, `w` white, `b` splash background,
/// `.` fully transparent, `?` anything else (anti-aliased edges).
fn pixel_class(px: [u8; 4]) -> char {
    match px {
        [_, _, _, 0] => '.',
        [79, 70, 229, 255] => 'p',
        [255, 255, 255, 255] => 'w',
        [248, 250, 252, 255] => 'b',
        _ => '?',
    }
}

fn class_map(img: &RgbaImage) -> String {
    let mut out = String::with_capacity(((img.width() + 1) * img.height()) as usize);
    for y in 0..img.height() {
        out.extend((0..img.width()).map(|x| pixel_class(img.get_pixel(x, y).0)));
        out.push('\n');
    }
    out
}

/// Compare against a stored pixel-class map. `?` in the golden marks edge
/// pixels that are not checked. `UPDATE_GOLDENS=1` rewrites the golden from
/// the current rendering.
fn check_golden(name: &str, canvas: &Canvas) {
    let expected_path = golden_path(name);
    let actual = class_map(&decoded(canvas));

    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &actual).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("unable to read golden {expected_path:?}: {e}"));
    let exp_rows: Vec<&str> = exp.lines().collect();
    let act_rows: Vec<&str> = actual.lines().collect();
    assert_eq!(exp_rows.len(), act_rows.len(), "{name}: height differs");

    let mut checked = 0;
    let mut mismatches = Vec::new();
    for (y, (e, a)) in exp_rows.iter().zip(&act_rows).enumerate() {
        assert_eq!(e.len(), a.len(), "{name}: width differs on row {y}");
        for (x, (ec, ac)) in e.chars().zip(a.chars()).enumerate() {
            if ec == '?' {
                continue;
            }
            checked += 1;
            if ec != ac {
                mismatches.push(format!("({x}, {y}) expected {ec} got {ac}"));
            }
        }
    }

    let total: usize = exp_rows.iter().map(|r| r.len()).sum();
    assert!(checked * 4 >= total * 3, "{name}: golden checks too few pixels");
    assert!(
        mismatches.is_empty(),
        "{name} drifted from its golden at {} pixels, first: {}",
        mismatches.len(),
        mismatches[..mismatches.len().min(8)].join(", ")
    );
}

#[test]
fn rendering_is_deterministic() {
    let png = |c: Canvas| c.encode_png().expect("encode png");
    assert_eq!(
        digest(&png(icon(96, false, &House))),
        digest(&png(icon(96, false, &House)))
    );
}

#[test]
fn golden_house_icon() {
    check_golden("house-icon-64.map", &icon(64, false, &House));
}

#[test]
fn golden_paw_maskable_icon() {
    check_golden("paw-maskable-64.map", &icon(64, true, &PawPrint));
}

#[test]
fn golden_splash() {
    let canvas = compose_splash(160, 240, &Palette::default()).expect("render splash");
    check_golden("splash-160-240.map", &canvas);
}
