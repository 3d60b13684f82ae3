// ============================================================================
// VEHICLE CARD VIEW - Una fila de la lista
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use std::rc::Rc;
use crate::dom::{ElementBuilder, append_child, on_click, set_attribute};
use crate::utils::{escape_html, CALL_BUTTON_LABEL};
use crate::viewmodels::vehicle_list::VehicleRow;

/// Bloque izquierdo (título + subtítulo). El texto del host siempre va escapado.
fn render_meta(title: &str, subtitle: &str) -> Result<Element, JsValue> {
    let html = format!(
        r#"<div class="model">{}</div><div class="plate">{}</div>"#,
        escape_html(title),
        escape_html(subtitle),
    );
    Ok(ElementBuilder::new("div")?
        .class("meta")
        .html(&html)
        .build())
}

/// Renderizar card de un vehículo
pub fn render_vehicle_card(
    row: &VehicleRow,
    on_action: Rc<dyn Fn(VehicleRow)>,
) -> Result<Element, JsValue> {
    let badge = ElementBuilder::new("div")?
        .class(&format!("badge {}", row.status.badge_class()))
        .text(row.status_label())
        .build();

    let call_btn = ElementBuilder::new("button")?
        .class("btn")
        .text(CALL_BUTTON_LABEL)
        .build();

    if row.action_enabled {
        let row_clone = row.clone();
        on_click(&call_btn, move |_e: web_sys::MouseEvent| {
            on_action(row_clone.clone());
        })?;
    } else {
        set_attribute(&call_btn, "disabled", "")?;
    }

    let badges = ElementBuilder::new("div")?
        .class("badges")
        .child(badge)?
        .child(call_btn)?
        .build();

    let card = ElementBuilder::new("div")?
        .class("card")
        .build();
    append_child(&card, &render_meta(&row.title, &row.subtitle)?)?;
    append_child(&card, &badges)?;

    Ok(card)
}

/// Card "sin resultados": sin botón, no debe parecer clicable
pub fn render_placeholder_card(title: &str, subtitle: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("card empty")
        .child(render_meta(title, subtitle)?)
        .map(ElementBuilder::build)
}
