use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    foundation::core::Rgba8,
    geometry::shape::ShapeKind,
    spotlight::control::{Command, Control},
    target::overlay::{ControlOverlay, OverlayAction},
};

#[test]
fn fitted_shape_replaces_configured_circle() {
    let view = Rect::new(100.0, 200.0, 140.0, 240.0);
    let target = TargetBuilder::new()
        .set_view(&view)
        .set_shape(Shape::circle(50.0))
        .build()
        .unwrap();

    assert_eq!(target.anchor(), Point::new(120.0, 220.0));
    assert_eq!(target.size(), Size::new(40.0, 40.0));
    assert_eq!(
        target.shape().kind,
        ShapeKind::RoundedRectangle {
            width: 60.0,
            height: 60.0,
            radius: 10.0,
        }
    );
    assert_eq!(target.shape().duration, Shape::circle(1.0).duration);
}

#[test]
fn as_configured_policy_keeps_shape() {
    let target = TargetBuilder::new()
        .set_size(40.0, 40.0)
        .set_shape(Shape::circle(50.0))
        .set_shape_policy(ShapePolicy::AsConfigured)
        .build()
        .unwrap();
    assert_eq!(target.shape(), &Shape::circle(50.0));
}

#[test]
fn defaults_are_origin_and_no_extras() {
    let target = Target::builder().build().unwrap();
    assert_eq!(target.anchor(), Point::ZERO);
    assert_eq!(target.size(), Size::ZERO);
    assert!(target.text().is_none());
    assert!(target.overlay().is_none());
    assert!(target.effect().is_empty());
}

#[test]
fn rejects_non_finite_anchor_and_negative_size() {
    let err = TargetBuilder::new()
        .set_anchor(Point::new(f64::NAN, 0.0))
        .build()
        .unwrap_err();
    assert!(matches!(err, SpotlightError::Validation(_)));

    let err = TargetBuilder::new().set_size(-1.0, 4.0).build().unwrap_err();
    assert!(matches!(err, SpotlightError::Validation(_)));

    let err = TargetBuilder::new()
        .set_size(f64::INFINITY, 4.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, SpotlightError::Validation(_)));
}

#[test]
fn invalid_effect_is_rejected() {
    let err = TargetBuilder::new()
        .set_effect(Effect::ripple(80.0, 40.0, Rgba8::WHITE))
        .build()
        .unwrap_err();
    assert!(matches!(err, SpotlightError::Validation(_)));
}

#[test]
fn anchor_and_size_can_come_from_different_elements() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(0.0, 0.0, 30.0, 50.0);
    let target = TargetBuilder::new()
        .set_anchor_from(&a)
        .set_size_from(&b)
        .build()
        .unwrap();
    assert_eq!(target.anchor(), Point::new(5.0, 5.0));
    assert_eq!(target.size(), Size::new(30.0, 50.0));
    assert_eq!(target.bounds(), Rect::new(-10.0, -20.0, 20.0, 30.0));
}

#[test]
fn listener_is_late_bindable_and_invoked() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut target = TargetBuilder::new()
        .set_text("hello")
        .set_overlay(Rc::new(ControlOverlay::new().with_control(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            OverlayAction::Next,
            Rgba8::WHITE,
        )))
        .build()
        .unwrap();
    assert_eq!(target.text().map(Text::as_str), Some("hello"));
    assert!(target.listener_mut().is_none());

    let l = log.clone();
    let c = log.clone();
    target.set_listener(
        TargetListener::new()
            .on_started(move || l.borrow_mut().push("started"))
            .on_clicked(move |ctl| {
                c.borrow_mut().push("clicked");
                ctl.next();
            }),
    );

    let listener = target.listener_mut().unwrap();
    listener.started();
    let mut control = Control::default();
    listener.clicked(&mut control);
    listener.ended();

    assert_eq!(*log.borrow(), vec!["started", "clicked"]);
    assert_eq!(control.commands(), &[Command::Next]);
}
