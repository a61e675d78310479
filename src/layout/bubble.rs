use crate::foundation::core::{Point, Rect, Size};

/// Horizontal offset of the bubble's left edge from the target's left edge.
pub const BUBBLE_LEAD_X: f64 = 20.0;
/// Vertical gap between target edge and bubble.
pub const BUBBLE_GAP_Y: f64 = 25.0;
/// Minimum distance kept from the viewport's left/right edges when shifting.
pub const VIEWPORT_EDGE: f64 = 10.0;
/// Extra room required below the bubble before flipping it above the target.
pub const BOTTOM_MARGIN: f64 = 10.0;

const MAX_COLUMNS: usize = u16::MAX as usize;

/// Wrapped text and its measured extent (padding included).
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub size: Size,
}

/// Text measuring collaborator; hosts plug in their own font metrics.
pub trait TextMetrics {
    /// Wrap `text` so that the block is at most `max_width` wide where possible.
    fn measure(&self, text: &str, max_width: f64) -> TextBlock;
}

/// Fixed-advance metrics with word wrapping, good enough for monospace hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub padding: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 18.0,
            padding: 8.0,
        }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str, max_width: f64) -> TextBlock {
        let inner = max_width - 2.0 * self.padding;
        let columns = if inner.is_finite() && self.char_width > 0.0 {
            ((inner / self.char_width).floor() as usize).clamp(1, MAX_COLUMNS)
        } else {
            MAX_COLUMNS
        };

        let lines: Vec<String> = textwrap::wrap(text, columns)
            .into_iter()
            .map(|l| l.into_owned())
            .collect();
        let widest = lines
            .iter()
            .map(|l| unicode_width::UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0);

        TextBlock {
            size: Size::new(
                widest as f64 * self.char_width + 2.0 * self.padding,
                lines.len() as f64 * self.line_height + 2.0 * self.padding,
            ),
            lines,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleSide {
    Below,
    Above,
}

/// Final bubble frame for one target.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleLayout {
    pub rect: Rect,
    pub block: TextBlock,
    pub side: BubbleSide,
    /// The bubble was narrowed to fit the viewport.
    pub width_clamped: bool,
}

/// Horizontal placement. Returns `(x, width, clamped)`.
///
/// Guarantees `x >= 0` and `x + width <= viewport_width` for non-negative viewports.
pub fn place_horizontal(
    anchor_x: f64,
    target_width: f64,
    bubble_width: f64,
    viewport_width: f64,
) -> (f64, f64, bool) {
    let vw = viewport_width.max(0.0);
    let w = bubble_width.max(0.0);
    let x = (anchor_x - target_width / 2.0 - BUBBLE_LEAD_X).max(0.0);

    if x + w <= vw {
        return (x, w, false);
    }
    if w > vw - 2.0 * VIEWPORT_EDGE {
        let clamped = (vw - 2.0 * VIEWPORT_EDGE).max(0.0);
        return (VIEWPORT_EDGE.min(vw), clamped, true);
    }
    (vw - VIEWPORT_EDGE - w, w, false)
}

/// Vertical placement. Returns `(y, side)`.
///
/// Below the target by default; flipped above (bubble bottom at the gap line) when the
/// bubble plus [`BOTTOM_MARGIN`] would overflow the bottom edge.
pub fn place_vertical(
    anchor_y: f64,
    target_height: f64,
    bubble_height: f64,
    viewport_height: f64,
) -> (f64, BubbleSide) {
    let below = anchor_y + target_height / 2.0 + BUBBLE_GAP_Y;
    if below + bubble_height + BOTTOM_MARGIN <= viewport_height {
        return (below, BubbleSide::Below);
    }
    let above_bottom = anchor_y - target_height / 2.0 - BUBBLE_GAP_Y;
    ((above_bottom - bubble_height).max(0.0), BubbleSide::Above)
}

/// Measure and place a text bubble next to a target. Best-effort heuristic, not a solver.
pub fn layout_bubble(
    text: &str,
    anchor: Point,
    target: Size,
    viewport: Size,
    metrics: &dyn TextMetrics,
) -> BubbleLayout {
    let max_width = (viewport.width - 2.0 * VIEWPORT_EDGE).max(0.0);
    let mut block = metrics.measure(text, max_width);

    let (x, width, width_clamped) =
        place_horizontal(anchor.x, target.width, block.size.width, viewport.width);
    if width_clamped {
        block = metrics.measure(text, width);
    }

    let (y, side) = place_vertical(anchor.y, target.height, block.size.height, viewport.height);

    BubbleLayout {
        rect: Rect::new(x, y, x + width, y + block.size.height),
        block,
        side,
        width_clamped,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/bubble.rs"]
mod tests;
