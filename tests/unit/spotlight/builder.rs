use super::*;
use crate::{foundation::core::Size, spotlight::sequence::SpotlightState};

#[test]
fn defaults_match_documented_values() {
    let s = SpotlightBuilder::new(Size::new(100.0, 100.0)).build().unwrap();
    assert_eq!(s.view().background(), Rgba8::new(0, 0, 0, 0xCC));
    assert_eq!(s.state(), SpotlightState::Idle);
    assert!(s.is_empty());
    assert_eq!(DEFAULT_FADE_DURATION, Duration::from_millis(1000));
    assert_eq!(DEFAULT_FADE_EASE, Ease::Decelerate(2.0));
}

#[test]
fn rejects_bad_viewport_and_ease() {
    assert!(matches!(
        SpotlightBuilder::new(Size::new(-1.0, 10.0)).build(),
        Err(SpotlightError::Validation(_))
    ));
    assert!(matches!(
        SpotlightBuilder::new(Size::new(10.0, f64::NAN)).build(),
        Err(SpotlightError::Validation(_))
    ));
    assert!(matches!(
        SpotlightBuilder::new(Size::new(10.0, 10.0))
            .set_animation(Ease::Accelerate(0.0))
            .build(),
        Err(SpotlightError::Validation(_))
    ));
}

#[test]
fn custom_metrics_drive_bubble_layout() {
    use crate::{
        foundation::core::Point, layout::bubble::MonospaceMetrics, target::model::TargetBuilder,
    };

    let target = TargetBuilder::new()
        .set_anchor(Point::new(50.0, 50.0))
        .set_size(40.0, 40.0)
        .set_text("abc")
        .build()
        .unwrap();
    let mut s = SpotlightBuilder::new(Size::new(400.0, 800.0))
        .set_targets([target])
        .set_duration(Duration::ZERO)
        .set_text_metrics(MonospaceMetrics {
            char_width: 10.0,
            line_height: 20.0,
            padding: 0.0,
        })
        .build()
        .unwrap();
    s.start();
    s.advance(Duration::ZERO);
    let bubble = s.view().bubble().unwrap();
    assert_eq!(bubble.rect.width(), 30.0);
    assert_eq!(bubble.rect.height(), 20.0);
}
