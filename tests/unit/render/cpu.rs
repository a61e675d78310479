use super::*;
use crate::foundation::core::Point;

fn assert_px_near(actual: [u8; 4], expected: [u8; 4]) {
    for c in 0..4 {
        let d = (i16::from(actual[c]) - i16::from(expected[c])).abs();
        assert!(d <= 2, "actual={actual:?} expected={expected:?}");
    }
}

#[test]
fn rejects_dimensions_outside_u16_and_zero() {
    assert!(matches!(
        CpuSurface::new(70_000, 10),
        Err(SpotlightError::Render(_))
    ));
    assert!(matches!(
        CpuSurface::new(10, 0),
        Err(SpotlightError::Render(_))
    ));
    let s = CpuSurface::new(32, 16).unwrap();
    assert_eq!(s.size(), Size::new(32.0, 16.0));
}

#[test]
fn dim_layer_over_white_backdrop() {
    let mut s = CpuSurface::new(16, 16).unwrap();
    s.set_backdrop_color(Rgba8::WHITE);
    s.begin_frame();
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0), Rgba8::new(0, 0, 0, 204));
    let f = s.frame();
    assert_px_near(f.pixel(3, 3).unwrap(), [51, 51, 51, 255]);
}

#[test]
fn clear_region_reveals_backdrop() {
    let mut s = CpuSurface::new(32, 32).unwrap();
    s.set_backdrop_color(Rgba8::new(255, 0, 0, 255));
    s.begin_frame();
    s.fill_rect(Rect::new(0.0, 0.0, 32.0, 32.0), Rgba8::BLACK);
    s.clear_region(&Geometry::Circle(kurbo::Circle::new(
        Point::new(16.0, 16.0),
        8.0,
    )));

    let f = s.frame();
    assert_px_near(f.pixel(16, 16).unwrap(), [255, 0, 0, 255]);
    assert_px_near(f.pixel(1, 1).unwrap(), [0, 0, 0, 255]);
    assert_px_near(s.layer().pixel(16, 16).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn empty_region_clears_nothing() {
    let mut s = CpuSurface::new(8, 8).unwrap();
    s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Rgba8::BLACK);
    s.clear_region(&Geometry::Circle(kurbo::Circle::new(
        Point::new(4.0, 4.0),
        0.0,
    )));
    assert_px_near(s.layer().pixel(4, 4).unwrap(), [0, 0, 0, 255]);
}

#[test]
fn draw_region_blends_over_layer() {
    let mut s = CpuSurface::new(16, 16).unwrap();
    s.draw_region(
        &Geometry::Circle(kurbo::Circle::new(Point::new(8.0, 8.0), 6.0)),
        &Paint::fill(Rgba8::new(255, 255, 255, 128)),
    );
    let px = s.layer().pixel(8, 8).unwrap();
    assert_px_near(px, [128, 128, 128, 128]);
    assert_eq!(s.layer().pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn text_block_draws_panel_and_line_bars() {
    let mut s = CpuSurface::new(64, 40).unwrap();
    let block = TextBlock {
        lines: vec!["abcd".to_string(), "ab".to_string()],
        size: Size::new(64.0, 40.0),
    };
    let style = TextStyle {
        panel: Rgba8::WHITE,
        ink: Rgba8::BLACK,
        corner_radius: 0.0,
    };
    s.draw_text_block(Rect::new(0.0, 0.0, 64.0, 40.0), &block, &style, 1.0);
    let f = s.layer();

    // inset 8, line height 12: first bar spans x 8..56, second 8..32.
    assert_px_near(f.pixel(1, 1).unwrap(), [255, 255, 255, 255]);
    assert_px_near(f.pixel(20, 14).unwrap(), [0, 0, 0, 255]);
    assert_px_near(f.pixel(50, 14).unwrap(), [0, 0, 0, 255]);
    assert_px_near(f.pixel(20, 26).unwrap(), [0, 0, 0, 255]);
    assert_px_near(f.pixel(50, 26).unwrap(), [255, 255, 255, 255]);
}

#[test]
fn invisible_text_paints_nothing() {
    let mut s = CpuSurface::new(16, 16).unwrap();
    let block = TextBlock {
        lines: vec!["x".to_string()],
        size: Size::new(16.0, 16.0),
    };
    s.draw_text_block(
        Rect::new(0.0, 0.0, 16.0, 16.0),
        &block,
        &TextStyle::default(),
        0.0,
    );
    assert!(s.layer().data.iter().all(|&b| b == 0));
}

#[test]
fn begin_frame_clears_layer_but_keeps_backdrop() {
    let mut s = CpuSurface::new(4, 4).unwrap();
    s.set_backdrop_color(Rgba8::new(0, 0, 255, 255));
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Rgba8::BLACK);
    s.begin_frame();
    assert_eq!(s.frame().pixel(2, 2), Some([0, 0, 255, 255]));
}

#[test]
fn backdrop_must_match_size_and_is_premultiplied_on_import() {
    let mut s = CpuSurface::new(1, 1).unwrap();
    let wrong = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![0; 8],
        premultiplied: true,
    };
    assert!(s.set_backdrop(&wrong).is_err());

    let straight = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![255, 0, 0, 128],
        premultiplied: false,
    };
    s.set_backdrop(&straight).unwrap();
    assert_eq!(s.frame().pixel(0, 0), Some([128, 0, 0, 128]));
}

#[test]
fn invalidate_counts_and_survives_resize() {
    let mut s = CpuSurface::new(4, 4).unwrap();
    s.invalidate();
    s.invalidate();
    s.resize(8, 2).unwrap();
    assert_eq!(s.frames_requested(), 2);
    assert_eq!(s.size(), Size::new(8.0, 2.0));
    assert!(s.resize(0, 2).is_err());
}

#[test]
fn dest_out_scales_all_channels() {
    let mut dst = vec![200, 100, 50, 200];
    dest_out_in_place(&mut dst, &[0, 0, 0, 255]);
    assert_eq!(dst, vec![0, 0, 0, 0]);

    let mut dst = vec![200, 100, 50, 200];
    dest_out_in_place(&mut dst, &[0, 0, 0, 0]);
    assert_eq!(dst, vec![200, 100, 50, 200]);
}
