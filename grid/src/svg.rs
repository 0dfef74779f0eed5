//! SVG backend for [`CellRenderer`].
//!
//! This module is the only place that touches the DOM. It builds one `<rect>`
//! per cell inside the host `<svg>` element and repaints cells by setting
//! their `fill`. All fallible DOM calls propagate errors as `JsValue`; the host
//! component logs them.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::cell::CellId;
use crate::consts::{CELL_SIZE_PX, CELL_STROKE, SVG_NS};
use crate::layout::{cell_origin, grid_extent_px};
use crate::render::{CellRenderer, CellRole};

/// Renders the grid as SVG rectangles.
pub struct SvgRenderer {
    rects: HashMap<CellId, Element>,
}

impl SvgRenderer {
    /// Populate `svg` with the cell grid, replacing any previous children.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no owner document or any DOM call fails.
    pub fn mount(svg: &Element) -> Result<Self, JsValue> {
        let document = svg
            .owner_document()
            .ok_or_else(|| JsValue::from_str("svg element is not attached to a document"))?;
        let extent = grid_extent_px().to_string();
        svg.set_attribute("width", &extent)?;
        svg.set_attribute("height", &extent)?;
        while let Some(child) = svg.first_child() {
            svg.remove_child(&child)?;
        }

        let mut rects = HashMap::new();
        for cell in CellId::all() {
            let rect = create_cell_rect(&document, cell)?;
            svg.append_child(&rect)?;
            rects.insert(cell, rect);
        }
        Ok(Self { rects })
    }
}

impl CellRenderer for SvgRenderer {
    type Error = JsValue;

    fn paint(&mut self, cell: CellId, role: CellRole) -> Result<(), JsValue> {
        let rect = self
            .rects
            .get(&cell)
            .ok_or_else(|| JsValue::from_str(&format!("no rect for cell {}", cell.key())))?;
        rect.set_attribute("fill", role.fill())
    }
}

fn create_cell_rect(document: &Document, cell: CellId) -> Result<Element, JsValue> {
    let origin = cell_origin(cell);
    let size = CELL_SIZE_PX.to_string();
    let rect = document.create_element_ns(Some(SVG_NS), "rect")?;
    rect.set_attribute("x", &origin.x.to_string())?;
    rect.set_attribute("y", &origin.y.to_string())?;
    rect.set_attribute("width", &size)?;
    rect.set_attribute("height", &size)?;
    rect.set_attribute("class", "cell")?;
    rect.set_attribute("data-x", &cell.x().to_string())?;
    rect.set_attribute("data-y", &cell.y().to_string())?;
    rect.set_attribute("stroke", CELL_STROKE)?;
    rect.set_attribute("fill", CellRole::Empty.fill())?;
    Ok(rect)
}
