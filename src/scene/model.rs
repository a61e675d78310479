use serde::{Deserialize, Serialize};

use crate::{
    animation::{ease::Ease, timeline::RepeatMode},
    foundation::core::{Point, Rect, Rgba8, Size},
    target::{model::ShapePolicy, overlay::OverlayAction},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct ColorDef(pub(crate) Rgba8);

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map(Self).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self(Rgba8::new(r, g, b, a))),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self(Rgba8::new(*r, *g, *b, 255))),
                [r, g, b, a] => Ok(Self(Rgba8::new(*r, *g, *b, *a))),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

pub(crate) fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(s: &str, at: usize) -> Result<u8, String> {
        let pair = s
            .get(at..at + 2)
            .ok_or_else(|| format!("invalid hex color \"{s}\""))?;
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Rgba8::new(
            hex_byte(s, 0)?,
            hex_byte(s, 2)?,
            hex_byte(s, 4)?,
            255,
        )),
        8 => Ok(Rgba8::new(
            hex_byte(s, 0)?,
            hex_byte(s, 2)?,
            hex_byte(s, 4)?,
            hex_byte(s, 6)?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub(crate) struct PointDef {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl PointDef {
    pub(crate) fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl<'de> Deserialize<'de> for PointDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct SizeDef {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl SizeDef {
    pub(crate) fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Host element bounds: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct RectDef {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl RectDef {
    pub(crate) fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum ShapeKindDef {
    Circle {
        radius: f64,
    },
    RoundedRectangle {
        width: f64,
        height: f64,
        radius: f64,
    },
    /// SVG path data in anchor-local coordinates.
    Custom {
        path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ShapeDef {
    #[serde(flatten)]
    pub(crate) kind: ShapeKindDef,
    #[serde(default)]
    pub(crate) duration_ms: Option<u64>,
    #[serde(default)]
    pub(crate) ease: Option<Ease>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum EffectKindDef {
    Empty,
    Ripple {
        offset: f64,
        radius: f64,
        color: ColorDef,
    },
    Flicker {
        radius: f64,
        color: ColorDef,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EffectDef {
    #[serde(flatten)]
    pub(crate) kind: EffectKindDef,
    #[serde(default)]
    pub(crate) duration_ms: Option<u64>,
    #[serde(default)]
    pub(crate) ease: Option<Ease>,
    #[serde(default)]
    pub(crate) repeat_mode: Option<RepeatMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct ControlDef {
    pub(crate) rect: RectDef,
    pub(crate) action: OverlayAction,
    #[serde(default = "default_control_color")]
    pub(crate) color: ColorDef,
}

fn default_control_color() -> ColorDef {
    ColorDef(Rgba8::WHITE)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TargetDef {
    /// Bounds of the highlighted host element; alternative to `anchor` + `size`.
    #[serde(default)]
    pub(crate) rect: Option<RectDef>,
    #[serde(default)]
    pub(crate) anchor: Option<PointDef>,
    #[serde(default)]
    pub(crate) size: Option<SizeDef>,
    #[serde(default)]
    pub(crate) text: Option<String>,
    #[serde(default)]
    pub(crate) shape: Option<ShapeDef>,
    #[serde(default)]
    pub(crate) shape_policy: ShapePolicy,
    #[serde(default)]
    pub(crate) effect: Option<EffectDef>,
    #[serde(default)]
    pub(crate) controls: Vec<ControlDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub(crate) enum ActionDef {
    Next,
    Previous,
    Finish,
    Show { index: usize },
    Tap { x: f64, y: f64 },
    Resize { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScriptStepDef {
    pub(crate) at_ms: u64,
    #[serde(flatten)]
    pub(crate) action: ActionDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TourDef {
    pub(crate) viewport: SizeDef,
    #[serde(default)]
    pub(crate) background: Option<ColorDef>,
    /// Solid color standing in for the host UI when rendering offline.
    #[serde(default)]
    pub(crate) backdrop: Option<ColorDef>,
    #[serde(default)]
    pub(crate) fade_ms: Option<u64>,
    #[serde(default)]
    pub(crate) ease: Option<Ease>,
    #[serde(default)]
    pub(crate) targets: Vec<TargetDef>,
    #[serde(default)]
    pub(crate) script: Vec<ScriptStepDef>,
    /// Total playback length; defaults to the last script step plus a grace period.
    #[serde(default)]
    pub(crate) duration_ms: Option<u64>,
}
