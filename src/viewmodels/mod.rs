pub mod filter;
pub mod availability;
pub mod vehicle_list;

pub use filter::{filter_vehicles, matches};
pub use availability::can_call;
pub use vehicle_list::{render_rows, status_text, ParkStatus, RowView, VehicleRow};
