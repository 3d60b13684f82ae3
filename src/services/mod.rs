pub mod nui_client;

pub use nui_client::{HostTransport, NuiClient};
