//! Repository implementations for the AssetHub entities.

pub mod machine;

pub use machine::MachineRepository;
