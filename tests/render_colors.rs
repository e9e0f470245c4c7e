mod common;

use pretty_assertions::assert_eq;
use testresult::TestResult;
use vizmath::color::{read_packed, write_packed};
use vizmath::math::{FLOAT_EPSILON, clamp, interpolate, is_equal};
use vizmath::{ColorRgba, PackedColor, RandomSource, Vector3, dot_product};

fn gradient(start: &ColorRgba, end: &ColorRgba, steps: usize, linear: bool) -> Vec<ColorRgba> {
    (0..steps)
        .map(|i| {
            let t = i as f32 / (steps - 1) as f32;
            ColorRgba::lerp(start, end, interpolate(0.0, 1.0, t, linear))
        })
        .collect()
}

#[test]
fn test_gradient_buffer_round_trip() -> TestResult {
    common::init_logging();
    let start = ColorRgba::from_bytes(0, 0, 0, 0);
    let end = ColorRgba::from_bytes(255, 128, 0, 255);
    let colors = gradient(&start, &end, 5, false);

    // every lerped color is opaque, even though start is transparent
    assert!(colors.iter().all(|c| c.a == 1.0));
    assert_eq!(colors[0].to_packed(), 0xff000000);
    assert_eq!(colors[4].to_packed(), 0xffff8000);

    let mut buffer = Vec::new();
    write_packed(&colors, &mut buffer)?;
    assert_eq!(buffer.len(), 5 * 4);

    let packed = read_packed(buffer.as_slice(), colors.len())?;
    let expected: Vec<u32> = colors.iter().map(ColorRgba::to_packed).collect();
    assert_eq!(packed, expected);
    Ok(())
}

#[test]
fn test_smooth_gradient_is_symmetric() {
    let colors = gradient(&ColorRgba::BLACK, &ColorRgba::WHITE, 3, false);
    assert_eq!(colors[1], ColorRgba::new(0.5, 0.5, 0.5, 1.0));
}

#[test]
fn test_palette_json() -> TestResult {
    let palette = vec![PackedColor::from(ColorRgba::RED), PackedColor(0x80112233)];
    let json = serde_json::to_string(&palette)?;
    assert_eq!(json, r##"["#ffff0000","#80112233"]"##);
    let read: Vec<PackedColor> = serde_json::from_str(&json)?;
    assert_eq!(read, palette);
    Ok(())
}

#[test]
fn test_seeded_jitter_is_reproducible() {
    common::init_logging();
    let jitter = |source: &mut RandomSource| -> Vec<u32> {
        (0..8)
            .map(|_| {
                let amount = clamp(source.random_float() * 2.0 - 1.0, -0.5, 0.5);
                let base = 0.5 + amount;
                ColorRgba::new(base, base, base, 1.0).to_packed()
            })
            .collect()
    };
    let mut source = RandomSource::from_entropy();
    let first = jitter(&mut source);
    let replay = jitter(&mut RandomSource::seeded(source.seed()));
    assert_eq!(first, replay);
}

#[test]
fn test_lighting_term() {
    let normal = Vector3::new(0.0, 0.0, 1.0);
    let light = Vector3::new(0.0, 0.6, 0.8);
    let intensity = clamp(dot_product(&normal, &light), 0.0, 1.0);
    assert!(is_equal(intensity, 0.8, FLOAT_EPSILON));

    let back_light = light * -1.0;
    assert_eq!(clamp(dot_product(&normal, &back_light), 0.0, 1.0), 0.0);
}
