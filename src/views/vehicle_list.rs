// ============================================================================
// VEHICLE LIST VIEW - Re-render completo de #list
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use std::rc::Rc;
use crate::dom::{append_child, set_inner_html};
use crate::viewmodels::vehicle_list::{RowView, VehicleRow};
use crate::views::vehicle_card::{render_placeholder_card, render_vehicle_card};

/// Vaciar el contenedor y volver a pintar todas las filas
pub fn render_vehicle_list(
    list: &Element,
    rows: &[RowView],
    on_action: Rc<dyn Fn(VehicleRow)>,
) -> Result<(), JsValue> {
    set_inner_html(list, "");

    for row in rows {
        let card = match row {
            RowView::Vehicle(vehicle_row) => render_vehicle_card(vehicle_row, on_action.clone())?,
            RowView::Placeholder { title, subtitle } => render_placeholder_card(title, subtitle)?,
        };
        append_child(list, &card)?;
    }

    Ok(())
}
