pub mod inventory;
pub mod service;

pub use inventory::{HostEntry, Inventory, PortEntry};
pub use service::ServiceRecord;
