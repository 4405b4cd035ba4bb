pub mod device;
pub mod envelopes;
pub mod site;

pub use device::*;
pub use envelopes::*;
pub use site::*;
