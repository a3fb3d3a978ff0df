pub mod address;
pub mod filter;
pub mod state;

pub use address::{address, generate_moved_statement};
pub use filter::{FilterError, ResourceFilter};
pub use state::{OutputValue, Resource, ResourceInstance, StateDocument};
