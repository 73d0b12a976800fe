//! Machine record operations: submissions, validation, and mutations.

pub mod draft;
pub mod service;
pub mod validate;

pub use draft::MachineDraft;
pub use service::MachineService;
pub use validate::MachineValidator;
