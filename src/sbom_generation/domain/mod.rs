pub mod component;
pub mod inventory;
pub mod sbom_metadata;

pub use component::{Component, ComponentName, Version};
pub use inventory::ComponentInventory;
pub use sbom_metadata::SbomMetadata;
