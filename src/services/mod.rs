pub mod inspector;

pub use inspector::{InspectorRegistry, VcsInspector};
