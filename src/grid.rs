//! Panel grid labelling
//!
//! Every panel gets its `col,row` position printed at its top-left corner so
//! a miswired chain is obvious at a glance. The grid is a single panel for
//! now; chained layouts are not mapped.

use tracing::debug;

use crate::canvas::{Canvas, Color};
use crate::text::draw_text_colored;

/// Pixel pitch between panel origins
pub const PANEL_SIZE: i32 = 64;

/// Arrangement of panels on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGrid {
    pub rows: u32,
    pub cols: u32,
    pub panel_size: i32,
}

/// One panel's position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub col: u32,
    pub row: u32,
    pub origin_x: i32,
    pub origin_y: i32,
}

impl Panel {
    /// Text drawn on the panel, e.g. `0,0`
    pub fn label(&self) -> String {
        format!("{},{}", self.col, self.row)
    }
}

impl Default for PanelGrid {
    fn default() -> Self {
        Self::single()
    }
}

impl PanelGrid {
    /// A 1x1 grid
    pub const fn single() -> Self {
        Self {
            rows: 1,
            cols: 1,
            panel_size: PANEL_SIZE,
        }
    }

    /// Panels in row-major order
    pub fn panels(&self) -> impl Iterator<Item = Panel> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| Panel {
                col,
                row,
                origin_x: offset(col, self.panel_size),
                origin_y: offset(row, self.panel_size),
            })
        })
    }
}

fn offset(index: u32, pitch: i32) -> i32 {
    i32::try_from(index).map_or(i32::MAX, |i| i.saturating_mul(pitch))
}

/// Blank the canvas, then print each panel's grid position at its origin.
///
/// Returns the number of panels labelled.
pub fn label_panels<C>(canvas: &mut C, grid: &PanelGrid, color: Color) -> usize
where
    C: Canvas + ?Sized,
{
    canvas.fill(Color::BLACK);

    let mut labelled = 0;
    for panel in grid.panels() {
        let label = panel.label();
        debug!(
            col = panel.col,
            row = panel.row,
            x = panel.origin_x,
            y = panel.origin_y,
            "Labelling panel {label}"
        );
        draw_text_colored(canvas, panel.origin_x, panel.origin_y, &label, color);
        labelled += 1;
    }
    labelled
}
