//! Workstation machine entity.

pub mod department;
pub mod model;
pub mod sort;

pub use department::Department;
pub use model::{Machine, NewMachine};
pub use sort::MachineSortKey;
