pub mod overlay;
pub mod vehicle_card;
pub mod vehicle_list;

pub use overlay::{apply_accent, apply_visibility, render_status};
pub use vehicle_card::{render_placeholder_card, render_vehicle_card};
pub use vehicle_list::render_vehicle_list;
