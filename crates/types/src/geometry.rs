use serde::{Deserialize, Serialize};

/// Sheet, cell and motion configuration for one generation pass.
///
/// All lengths are in sheet units (millimetres for the reference device).
/// Page space has its origin at the top-left corner of the sheet with the
/// Y axis pointing down; the machine-space conversion lives in the gcode
/// crate. The struct is plain read-only configuration: a pass never
/// mutates it, and a changed value simply means the next pass recomputes
/// everything from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceGeometry {
    /// Sheet width.
    pub paper_width: f64,
    /// Sheet height.
    pub paper_height: f64,
    /// Horizontal margin, applied on both the left and right edge.
    pub margin_width: f64,
    /// Vertical margin, applied on both the top and bottom edge.
    pub margin_height: f64,
    /// Pitch between adjacent dots of one cell, both axes.
    pub letter_width: f64,
    /// Dot radius. Used by preview rendering and by the line-wrap check.
    pub dot_radius: f64,
    /// Horizontal gap between two cells.
    pub letter_padding: f64,
    /// Vertical gap between two lines.
    pub line_padding: f64,
    /// Z position at which the head embosses a dot.
    pub head_down_position: f64,
    /// Z position at which the head travels.
    pub head_up_position: f64,
    /// Feed rate for the toolpath.
    pub speed: f64,
    /// Delta-style machines reference the centre of the sheet instead of
    /// its edge.
    pub center_origin: bool,
}

impl Default for DeviceGeometry {
    /// Standard braille dimensions on an A5-ish sheet, matching the
    /// reference embosser setup.
    fn default() -> Self {
        Self {
            paper_width: 170.0,
            paper_height: 125.0,
            margin_width: 20.0,
            margin_height: 20.0,
            letter_width: 2.54,
            dot_radius: 1.25,
            letter_padding: 3.75,
            line_padding: 5.3,
            head_down_position: -2.0,
            head_up_position: 10.0,
            speed: 5000.0,
            center_origin: false,
        }
    }
}

impl DeviceGeometry {
    /// Rightmost X a cell may still touch.
    pub fn content_right(&self) -> f64 {
        self.paper_width - self.margin_width
    }

    /// Lowest Y a line may still start at.
    pub fn content_bottom(&self) -> f64 {
        self.paper_height - self.margin_height
    }
}
