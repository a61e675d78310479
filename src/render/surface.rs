use crate::{
    foundation::core::{Rect, Rgba8, Size},
    geometry::region::Geometry,
    layout::bubble::TextBlock,
};

/// Paint used for non-punching draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paint {
    pub color: Rgba8,
}

impl Paint {
    pub fn fill(color: Rgba8) -> Self {
        Self { color }
    }

    pub fn scale_alpha(self, factor: f64) -> Self {
        Self {
            color: self.color.scale_alpha(factor),
        }
    }
}

/// Colors of the floating text bubble.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    pub panel: Rgba8,
    pub ink: Rgba8,
    pub corner_radius: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            panel: Rgba8::new(255, 255, 255, 240),
            ink: Rgba8::new(33, 33, 33, 255),
            corner_radius: 6.0,
        }
    }
}

/// Drawing capabilities the spotlight needs from its host.
///
/// All coordinates are surface coordinates; alpha values are already folded into colors
/// except for [`DrawSurface::draw_text_block`], which receives the bubble opacity.
pub trait DrawSurface {
    fn size(&self) -> Size;

    /// Called once before each frame is painted.
    fn begin_frame(&mut self) {}

    fn fill_rect(&mut self, rect: Rect, color: Rgba8);

    /// Punch `region` through everything drawn so far (clear compositing).
    fn clear_region(&mut self, region: &Geometry);

    fn draw_region(&mut self, region: &Geometry, paint: &Paint);

    fn draw_text_block(&mut self, frame: Rect, block: &TextBlock, style: &TextStyle, alpha: f64);

    /// Request another frame.
    fn invalidate(&mut self);
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Rgba8,
    },
    Clear {
        region: Geometry,
    },
    Draw {
        region: Geometry,
        paint: Paint,
    },
    Text {
        frame: Rect,
        lines: Vec<String>,
        alpha: f64,
    },
}

/// Display-list surface: records draw calls instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
    invalidations: usize,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            invalidations: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn begin_frame(&mut self) {
        self.commands.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn clear_region(&mut self, region: &Geometry) {
        self.commands.push(DrawCommand::Clear {
            region: region.clone(),
        });
    }

    fn draw_region(&mut self, region: &Geometry, paint: &Paint) {
        self.commands.push(DrawCommand::Draw {
            region: region.clone(),
            paint: *paint,
        });
    }

    fn draw_text_block(&mut self, frame: Rect, block: &TextBlock, _style: &TextStyle, alpha: f64) {
        self.commands.push(DrawCommand::Text {
            frame,
            lines: block.lines.clone(),
            alpha,
        });
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
