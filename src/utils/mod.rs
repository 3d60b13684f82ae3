// Utils compartidos

pub mod constants;
pub mod escape;
pub mod js_value;

pub use constants::*;
pub use escape::*;
pub use js_value::*;
