pub mod vehicle;
pub mod message;
pub mod command;

pub use vehicle::VehicleRecord;
pub use message::HostMessage;
pub use command::OutboundCommand;
