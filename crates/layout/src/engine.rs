use crate::{LayoutError, PlacedCell, PlacedDot, SheetLayout};
use dotpress_tables::LanguageDefinition;
use dotpress_translit::Token;
use dotpress_types::DeviceGeometry;

/// Places cells on the sheet with a sequential cursor walk.
///
/// The cursor starts at the top-left margin corner and advances one cell
/// pitch per cell. Wrapping happens when the next cell would cross the
/// right margin; explicit line breaks advance the same way. Once the
/// cursor passes the bottom margin the pass stops and the remaining
/// input is dropped.
pub struct LayoutEngine<'a> {
    table: &'a LanguageDefinition,
    geometry: &'a DeviceGeometry,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(table: &'a LanguageDefinition, geometry: &'a DeviceGeometry) -> Self {
        Self { table, geometry }
    }

    pub fn lay_out<I>(&self, tokens: I) -> Result<SheetLayout, LayoutError>
    where
        I: IntoIterator<Item = Token>,
    {
        self.validate_geometry()?;

        let g = self.geometry;
        let rows = self.table.dot_map.rows();
        let line_pitch =
            self.table.variant.line_pitch_rows() as f64 * g.letter_width + g.line_padding;

        let mut tokens = tokens.into_iter();
        let mut layout = SheetLayout::default();
        let mut cx = g.margin_width;
        let mut cy = g.margin_height;

        // A sheet too short for even one line yields nothing at all.
        if cy + line_pitch > g.content_bottom() {
            layout.truncated = tokens.next().is_some();
            if layout.truncated {
                log::warn!("sheet shorter than one line pitch, nothing placed");
            }
            return Ok(layout);
        }

        while let Some(token) = tokens.next() {
            match token {
                Token::LineBreak => {
                    cy += line_pitch;
                    cx = g.margin_width;
                }
                Token::Cell(cell) => {
                    let mut dots = Vec::new();
                    for row in 0..rows {
                        for col in 0..2 {
                            let index = self.table.dot_map.index_at(col, row);
                            if cell.indices.contains(&index) {
                                dots.push(PlacedDot {
                                    x: cx + col as f64 * g.letter_width,
                                    y: cy + row as f64 * g.letter_width,
                                    is_cell_origin: col == 0 && row == 0,
                                });
                            }
                        }
                    }
                    layout.cells.push(PlacedCell {
                        anchor_x: cx,
                        anchor_y: cy,
                        dots,
                    });

                    cx += g.letter_width + g.letter_padding;
                    // Wrap when the next cell would cross the right margin.
                    if cx + g.letter_width + g.dot_radius > g.content_right() {
                        cy += line_pitch;
                        cx = g.margin_width;
                    }
                }
            }
            if cy > g.content_bottom() {
                layout.truncated = tokens.next().is_some();
                break;
            }
        }

        if layout.truncated {
            log::debug!(
                "sheet full after {} cells, remaining input dropped",
                layout.cells.len()
            );
        }
        Ok(layout)
    }

    fn validate_geometry(&self) -> Result<(), LayoutError> {
        let g = self.geometry;
        if !(g.paper_width.is_finite() && g.paper_width > 0.0)
            || !(g.paper_height.is_finite() && g.paper_height > 0.0)
        {
            return Err(LayoutError::InvalidSheet(g.paper_width, g.paper_height));
        }
        let lengths = [
            ("marginWidth", g.margin_width),
            ("marginHeight", g.margin_height),
            ("letterWidth", g.letter_width),
            ("letterPadding", g.letter_padding),
            ("linePadding", g.line_padding),
            ("dotRadius", g.dot_radius),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotpress_tables::{eight_dot, six_dot};
    use dotpress_translit::Transliterator;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn lay_out(text: &str, table: &LanguageDefinition, geometry: &DeviceGeometry) -> SheetLayout {
        let tokens: Vec<Token> = Transliterator::new(text, table)
            .collect::<Result<_, _>>()
            .unwrap();
        LayoutEngine::new(table, geometry).lay_out(tokens).unwrap()
    }

    #[test]
    fn first_cell_sits_on_the_margin_corner() {
        let table = six_dot();
        let layout = lay_out("a", &table, &DeviceGeometry::default());
        assert_eq!(layout.cells.len(), 1);
        assert_eq!(layout.cells[0].anchor_x, 20.0);
        assert_eq!(layout.cells[0].anchor_y, 20.0);
        // 'a' is dot 1, which sits on the anchor itself.
        assert_eq!(layout.cells[0].dots.len(), 1);
        assert!(layout.cells[0].dots[0].is_cell_origin);
    }

    #[test]
    fn digit_scenario_anchors() {
        // "5" emits the digit prefix cell then the digit cell, advancing
        // one full cell pitch between anchors.
        let table = six_dot();
        let layout = lay_out("5", &table, &DeviceGeometry::default());
        assert_eq!(layout.cells.len(), 2);
        assert_eq!(
            (layout.cells[0].anchor_x, layout.cells[0].anchor_y),
            (20.0, 20.0)
        );
        assert_close(layout.cells[1].anchor_x, 20.0 + 2.54 + 3.75);
        assert_eq!(layout.cells[1].anchor_y, 20.0);
        assert!(!layout.truncated);
    }

    #[test]
    fn dots_follow_the_grid() {
        // 'b' is dots 1,2: two dots stacked in the left column.
        let table = six_dot();
        let layout = lay_out("b", &table, &DeviceGeometry::default());
        let dots = &layout.cells[0].dots;
        assert_eq!(dots.len(), 2);
        assert_eq!((dots[0].x, dots[0].y), (20.0, 20.0));
        assert_eq!(dots[1].x, 20.0);
        assert_close(dots[1].y, 20.0 + 2.54);
        assert!(dots[0].is_cell_origin);
        assert!(!dots[1].is_cell_origin);
    }

    #[test]
    fn anchor_recorded_when_origin_dot_inactive() {
        // ',' is dot 2 only: no dot on the anchor, anchor still recorded.
        let table = six_dot();
        let layout = lay_out(",", &table, &DeviceGeometry::default());
        let cell = &layout.cells[0];
        assert_eq!((cell.anchor_x, cell.anchor_y), (20.0, 20.0));
        assert_eq!(cell.dots.len(), 1);
        assert!(!cell.dots[0].is_cell_origin);
        assert_close(cell.dots[0].y, 20.0 + 2.54);
    }

    #[test]
    fn line_break_advances_by_line_pitch() {
        let table = six_dot();
        let layout = lay_out("a\nb", &table, &DeviceGeometry::default());
        assert_eq!(layout.cells[1].anchor_x, 20.0);
        assert_close(layout.cells[1].anchor_y, 20.0 + 3.0 * 2.54 + 5.3);
    }

    #[test]
    fn eight_dot_uses_compacted_line_pitch() {
        let table = eight_dot();
        let layout = lay_out("a\nb", &table, &DeviceGeometry::default());
        assert_close(layout.cells[1].anchor_y, 20.0 + 2.0 * 2.54 + 5.3);
    }

    #[test]
    fn wraps_at_the_right_margin() {
        let table = six_dot();
        let geometry = DeviceGeometry {
            // Room for two cells per line, not three.
            paper_width: 20.0 + 2.0 * (2.54 + 3.75) + 2.54 + 20.0,
            paper_height: 1000.0,
            ..DeviceGeometry::default()
        };
        let layout = lay_out("aaa", &table, &geometry);
        assert_eq!(layout.cells.len(), 3);
        assert_eq!(layout.cells[1].anchor_y, 20.0);
        assert_eq!(layout.cells[2].anchor_x, 20.0);
        assert!(layout.cells[2].anchor_y > 20.0);
    }

    #[test]
    fn too_short_sheet_places_nothing() {
        let table = six_dot();
        let geometry = DeviceGeometry {
            // Margins plus one line pitch do not fit.
            paper_height: 40.0 + 3.0 * 2.54 + 5.3 - 1.0,
            ..DeviceGeometry::default()
        };
        let layout = lay_out("abc", &table, &geometry);
        assert!(layout.cells.is_empty());
        assert!(layout.truncated);
    }

    #[test]
    fn overflow_truncates_silently() {
        let table = six_dot();
        let geometry = DeviceGeometry {
            // One line fits, the second does not.
            paper_height: 40.0 + 2.0 * (3.0 * 2.54 + 5.3) - 1.0,
            ..DeviceGeometry::default()
        };
        let layout = lay_out("a\nb\nc", &table, &geometry);
        assert!(layout.truncated);
        assert!(layout.cells.len() < 3);
    }

    #[test]
    fn empty_text_fits_trivially() {
        let table = six_dot();
        let layout = lay_out("", &table, &DeviceGeometry::default());
        assert!(layout.cells.is_empty());
        assert!(!layout.truncated);
    }

    #[test]
    fn rejects_nan_sheet() {
        let table = six_dot();
        let geometry = DeviceGeometry {
            paper_width: f64::NAN,
            ..DeviceGeometry::default()
        };
        let result = LayoutEngine::new(&table, &geometry).lay_out(Vec::new());
        assert!(matches!(result, Err(LayoutError::InvalidSheet(..))));
    }

    #[test]
    fn rejects_negative_margin() {
        let table = six_dot();
        let geometry = DeviceGeometry {
            margin_width: -1.0,
            ..DeviceGeometry::default()
        };
        let result = LayoutEngine::new(&table, &geometry).lay_out(Vec::new());
        assert!(matches!(
            result,
            Err(LayoutError::InvalidParameter { name: "marginWidth", .. })
        ));
    }
}
