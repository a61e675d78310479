use kurbo::PathEl;

use crate::{
    foundation::core::{BezPath, Rect, Rgba8, Size},
    foundation::error::{SpotlightError, SpotlightResult},
    foundation::math::{mul_div255_u8, mul_div255_u16},
    geometry::region::{Geometry, PATH_TOLERANCE},
    layout::bubble::TextBlock,
    render::{
        frame::FrameRGBA,
        surface::{DrawSurface, Paint, TextStyle},
    },
};

const TEXT_INSET: f64 = 8.0;
const LINE_BAR_FILL: f64 = 0.5;

/// Raster [`DrawSurface`] backed by `vello_cpu`.
///
/// Keeps two premultiplied RGBA8 buffers: the backdrop (whatever the host UI shows beneath
/// the spotlight) and the overlay layer the spotlight paints into. Each primitive is
/// rasterized into a scratch pixmap and then composited onto the layer, so clearing a region
/// only ever erases overlay pixels and reveals the backdrop.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    scratch: vello_cpu::Pixmap,
    layer: Vec<u8>,
    backdrop: Vec<u8>,
    frames_requested: u64,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("frames_requested", &self.frames_requested)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> SpotlightResult<Self> {
        let (w, h) = checked_dims(width, height)?;
        let len = usize::from(w) * usize::from(h) * 4;
        Ok(Self {
            width: w,
            height: h,
            ctx: vello_cpu::RenderContext::new(w, h),
            scratch: vello_cpu::Pixmap::new(w, h),
            layer: vec![0; len],
            backdrop: vec![0; len],
            frames_requested: 0,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// How many times [`DrawSurface::invalidate`] was called.
    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// Fill the backdrop with a solid color.
    pub fn set_backdrop_color(&mut self, color: Rgba8) {
        let px = color.to_premul();
        for d in self.backdrop.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Replace the backdrop with a frame of identical dimensions.
    pub fn set_backdrop(&mut self, frame: &FrameRGBA) -> SpotlightResult<()> {
        if frame.width != self.width() || frame.height != self.height() {
            return Err(SpotlightError::render(format!(
                "backdrop is {}x{}, surface is {}x{}",
                frame.width, frame.height, self.width, self.height
            )));
        }
        if frame.data.len() != self.backdrop.len() {
            return Err(SpotlightError::render("backdrop buffer size mismatch"));
        }
        if frame.premultiplied {
            self.backdrop.copy_from_slice(&frame.data);
        } else {
            for (d, s) in self
                .backdrop
                .chunks_exact_mut(4)
                .zip(frame.data.chunks_exact(4))
            {
                d.copy_from_slice(&Rgba8::new(s[0], s[1], s[2], s[3]).to_premul());
            }
        }
        Ok(())
    }

    /// Reallocate for a new size. Backdrop and layer are reset to transparent.
    pub fn resize(&mut self, width: u32, height: u32) -> SpotlightResult<()> {
        *self = Self {
            frames_requested: self.frames_requested,
            ..Self::new(width, height)?
        };
        Ok(())
    }

    /// The overlay layer alone (premultiplied).
    pub fn layer(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.layer.clone(),
            premultiplied: true,
        }
    }

    /// Overlay layer composited over the backdrop (premultiplied).
    pub fn frame(&self) -> FrameRGBA {
        let mut data = self.backdrop.clone();
        premul_over_in_place(&mut data, &self.layer);
        FrameRGBA {
            width: self.width(),
            height: self.height(),
            data,
            premultiplied: true,
        }
    }

    fn rasterize(&mut self, fill: Fill<'_>, color: Rgba8) {
        clear_pixmap_to_transparent(&mut self.scratch);
        self.ctx.reset();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        match fill {
            Fill::Rect(r) => self
                .ctx
                .fill_rect(&vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)),
            Fill::Path(p) => {
                let cpu_path = bezpath_to_cpu(p);
                self.ctx.fill_path(&cpu_path);
            }
        }
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.scratch);
    }

    fn composite_scratch(&mut self) {
        premul_over_in_place(&mut self.layer, self.scratch.data_as_u8_slice());
    }

    fn paint(&mut self, fill: Fill<'_>, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        self.rasterize(fill, color);
        self.composite_scratch();
    }
}

enum Fill<'a> {
    Rect(Rect),
    Path(&'a BezPath),
}

impl DrawSurface for CpuSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    fn begin_frame(&mut self) {
        self.layer.fill(0);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.paint(Fill::Rect(rect), color);
    }

    fn clear_region(&mut self, region: &Geometry) {
        if region.is_empty() {
            return;
        }
        let path = region.to_path();
        self.rasterize(Fill::Path(&path), Rgba8::WHITE);
        dest_out_in_place(&mut self.layer, self.scratch.data_as_u8_slice());
    }

    fn draw_region(&mut self, region: &Geometry, paint: &Paint) {
        if region.is_empty() {
            return;
        }
        let path = region.to_path();
        self.paint(Fill::Path(&path), paint.color);
    }

    fn draw_text_block(&mut self, frame: Rect, block: &TextBlock, style: &TextStyle, alpha: f64) {
        if frame.is_zero_area() {
            return;
        }
        let panel = kurbo::RoundedRect::from_rect(frame, style.corner_radius);
        let panel_path = kurbo::Shape::to_path(&panel, PATH_TOLERANCE);
        self.paint(Fill::Path(&panel_path), style.panel.scale_alpha(alpha));

        // Glyphs belong to the host; lines are drawn as bars of proportional width.
        let n = block.lines.len();
        if n == 0 {
            return;
        }
        let inset = TEXT_INSET.min(frame.width() / 4.0).min(frame.height() / 4.0);
        let inner_w = frame.width() - 2.0 * inset;
        let line_h = (frame.height() - 2.0 * inset) / n as f64;
        let widest = block
            .lines
            .iter()
            .map(|l| unicode_width::UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0);
        if widest == 0 || inner_w <= 0.0 || line_h <= 0.0 {
            return;
        }
        let ink = style.ink.scale_alpha(alpha);
        for (i, line) in block.lines.iter().enumerate() {
            let cols = unicode_width::UnicodeWidthStr::width(line.as_str());
            if cols == 0 {
                continue;
            }
            let w = inner_w * cols as f64 / widest as f64;
            let top = frame.y0 + inset + i as f64 * line_h + line_h * (1.0 - LINE_BAR_FILL) / 2.0;
            let bar = Rect::new(
                frame.x0 + inset,
                top,
                frame.x0 + inset + w,
                top + line_h * LINE_BAR_FILL,
            );
            self.paint(Fill::Rect(bar), ink);
        }
    }

    fn invalidate(&mut self) {
        self.frames_requested += 1;
    }
}

fn checked_dims(width: u32, height: u32) -> SpotlightResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SpotlightError::render("surface width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SpotlightError::render("surface height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(SpotlightError::render(format!(
            "surface must be non-empty, got {w}x{h}"
        )));
    }
    Ok((w, h))
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premul_over_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255 - sa;
        d[3] = s[3].saturating_add(mul_div255_u8(u16::from(d[3]), inv));
        for c in 0..3 {
            d[c] = s[c].saturating_add(mul_div255_u8(u16::from(d[c]), inv));
        }
    }
}

/// `dst *= 1 - mask.alpha`: erase wherever the mask covers.
fn dest_out_in_place(dst: &mut [u8], mask: &[u8]) {
    for (d, m) in dst.chunks_exact_mut(4).zip(mask.chunks_exact(4)) {
        let ma = u16::from(m[3]);
        if ma == 0 {
            continue;
        }
        let keep = 255 - ma;
        for c in d.iter_mut() {
            *c = mul_div255_u16(u16::from(*c), keep) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
