use pretty_assertions::assert_eq;

use super::*;
use crate::{
    animation::{clock::ManualClock, ease::Ease, timeline::RepeatMode},
    spotlight::Stage,
};

const TOUR: &str = r##"{
  "viewport": { "width": 400, "height": 800 },
  "background": "#000000CC",
  "backdrop": [240, 240, 240],
  "fade_ms": 100,
  "ease": "linear",
  "targets": [
    {
      "rect": { "x": 30, "y": 30, "width": 40, "height": 40 },
      "text": "Menu lives here",
      "effect": { "kind": "ripple", "offset": 40, "radius": 80, "color": "#FFFFFF80" },
      "controls": [
        { "rect": { "x": 300, "y": 700, "width": 80, "height": 40 }, "action": "next" }
      ]
    },
    {
      "anchor": [200, 400],
      "size": { "width": 100, "height": 50 },
      "shape": { "kind": "circle", "radius": 60, "duration_ms": 200, "ease": { "decelerate": 1.5 } },
      "shape_policy": "as_configured",
      "effect": { "kind": "flicker", "radius": 70, "color": { "r": 255, "g": 0, "b": 0 },
                  "repeat_mode": "restart", "duration_ms": 300 }
    },
    {
      "anchor": { "x": 100, "y": 700 },
      "size": { "width": 0, "height": 0 },
      "shape": { "kind": "custom", "path": "M-10,-10 L10,-10 L10,10 L-10,10 Z" },
      "shape_policy": "as_configured"
    }
  ],
  "script": [
    { "at_ms": 1000, "op": "tap", "x": 340, "y": 720 },
    { "at_ms": 2000, "op": "show", "index": 2 },
    { "at_ms": 3000, "op": "finish" }
  ]
}"##;

fn tour() -> Tour {
    Tour::from_json_str(TOUR).unwrap()
}

#[test]
fn parses_and_validates() {
    let t = tour();
    t.validate().unwrap();
    assert_eq!(t.viewport(), Size::new(400.0, 800.0));
    assert_eq!(t.target_count(), 3);
    assert_eq!(t.backdrop(), Rgba8::new(240, 240, 240, 255));
    assert_eq!(t.duration(), Duration::from_millis(6000));
    assert_eq!(
        t.script(),
        vec![
            ScriptStep {
                at: Duration::from_millis(1000),
                action: TourAction::Tap(Point::new(340.0, 720.0)),
            },
            ScriptStep {
                at: Duration::from_millis(2000),
                action: TourAction::Show(2),
            },
            ScriptStep {
                at: Duration::from_millis(3000),
                action: TourAction::Finish,
            },
        ]
    );
}

#[test]
fn builds_targets_with_their_options() {
    let s = tour().build_spotlight().unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.view().background(), Rgba8::new(0, 0, 0, 0xCC));

    let first = &s.targets()[0];
    assert_eq!(first.anchor(), Point::new(50.0, 50.0));
    assert_eq!(first.shape(), &Shape::rounded_rectangle(60.0, 60.0, 10.0));
    assert_eq!(
        first.effect().kind,
        EffectKind::Ripple {
            offset: 40.0,
            radius: 80.0,
            color: Rgba8::new(255, 255, 255, 0x80),
        }
    );
    assert!(first.overlay().is_some());

    let second = &s.targets()[1];
    assert_eq!(
        second.shape(),
        &Shape::circle(60.0)
            .with_duration(Duration::from_millis(200))
            .with_ease(Ease::Decelerate(1.5))
    );
    assert_eq!(second.effect().repeat_mode, RepeatMode::Restart);
    assert_eq!(second.effect().duration, Duration::from_millis(300));

    assert!(matches!(s.targets()[2].shape().kind, ShapeKind::Custom { .. }));
}

#[test]
fn rejects_bad_tours() {
    let bad_show = TOUR.replace(r#""index": 2"#, r#""index": 9"#);
    assert!(matches!(
        Tour::from_json_str(&bad_show).unwrap().validate(),
        Err(SpotlightError::Validation(_))
    ));

    let out_of_order = TOUR.replace(r#""at_ms": 3000"#, r#""at_ms": 10"#);
    assert!(Tour::from_json_str(&out_of_order).unwrap().validate().is_err());

    let bad_ripple = TOUR.replace(r#""offset": 40"#, r#""offset": 90"#);
    let err = Tour::from_json_str(&bad_ripple)
        .unwrap()
        .build_spotlight()
        .unwrap_err();
    assert!(err.to_string().contains("targets[0]"), "{err}");

    let zero_viewport = TOUR.replace(r#""width": 400"#, r#""width": 0"#);
    assert!(Tour::from_json_str(&zero_viewport).unwrap().validate().is_err());

    let both = TOUR.replace(r#""anchor": [200, 400],"#, r#""anchor": [200, 400], "rect": { "x": 0, "y": 0, "width": 1, "height": 1 },"#);
    assert!(Tour::from_json_str(&both).unwrap().validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        Tour::from_json_str("{ \"viewport\": 3 }"),
        Err(SpotlightError::Serde(_))
    ));
    assert!(matches!(
        Tour::from_json_str(r##"{ "viewport": { "width": 1, "height": 1 }, "background": "#12" }"##),
        Err(SpotlightError::Serde(_))
    ));
}

#[test]
fn json_round_trips_through_serialization() {
    let json = tour().to_json_pretty().unwrap();
    let again = Tour::from_json_str(&json).unwrap();
    assert_eq!(again.to_json_pretty().unwrap(), json);
}

#[test]
fn player_replays_script() {
    let mut p = TourPlayer::new(&tour()).unwrap();
    assert_eq!(p.spotlight().state(), SpotlightState::Starting);

    let step = Duration::from_millis(10);
    while p.now() < Duration::from_millis(1000) {
        p.advance(step);
    }
    // The tap at 1s hit the "next" control of the first target.
    assert_eq!(
        p.spotlight().state(),
        SpotlightState::Running {
            index: 0,
            stage: Stage::Exiting
        }
    );

    while p.now() < Duration::from_millis(2500) {
        p.advance(step);
    }
    assert_eq!(p.spotlight().current_index(), Some(2));

    while !p.is_finished() && p.now() < Duration::from_millis(6000) {
        p.advance(step);
    }
    assert!(p.is_finished());
    assert_eq!(p.spotlight().state(), SpotlightState::Idle);
}

#[test]
fn player_ticks_from_a_clock() {
    let mut p = TourPlayer::new(&tour()).unwrap();
    let clock = ManualClock::new();
    p.tick(&clock);
    assert_eq!(p.now(), Duration::ZERO);
    clock.advance(Duration::from_millis(150));
    p.tick(&clock);
    assert_eq!(p.now(), Duration::from_millis(150));
    assert_eq!(p.spotlight().current_index(), Some(0));
}

#[test]
fn backdrop_paints_host_widgets() {
    let frame = tour().render_backdrop().unwrap();
    assert_eq!((frame.width, frame.height), (400, 800));
    assert_eq!(frame.pixel(5, 5), Some([240, 240, 240, 255]));
    let widget = HOST_WIDGET.to_premul();
    assert_eq!(frame.pixel(50, 50), Some(widget));
}

#[test]
fn pixel_size_rounds_up_and_rejects_degenerate() {
    assert_eq!(pixel_size(Size::new(10.2, 3.0)).unwrap(), (11, 3));
    assert!(pixel_size(Size::new(0.5, 3.0)).is_err());
    assert!(pixel_size(Size::new(f64::NAN, 3.0)).is_err());
    assert!(pixel_size(Size::new(70_000.0, 3.0)).is_err());
}
