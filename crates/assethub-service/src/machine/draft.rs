//! Raw machine submission.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A machine registration or edit submission, exactly as received.
///
/// Every field arrives untyped; the validation layer turns a draft into a
/// typed [`assethub_entity::machine::NewMachine`] or rejects it with the
/// full list of field violations. Declarative length/required rules live
/// here; format and uniqueness rules are applied by
/// [`crate::machine::MachineValidator`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MachineDraft {
    /// Machine display name.
    #[validate(length(min = 2, max = 100, message = "name must be between 2 and 100 characters"))]
    #[serde(default)]
    pub name: String,
    /// Department label.
    #[serde(default)]
    pub department: String,
    /// IP address in textual form.
    #[serde(default)]
    pub ip_address: String,
    /// MAC address in 6-octet hex-pair form.
    #[serde(default)]
    pub mac_address: String,
    /// Network hostname.
    #[validate(length(min = 3, message = "hostname must be at least 3 characters"))]
    #[serde(default)]
    pub hostname: String,
    /// Installed RAM in gigabytes.
    #[validate(required(message = "ram_gb is required"))]
    pub ram_gb: Option<i32>,
    /// Storage capacity in gigabytes.
    #[validate(required(message = "storage_gb is required"))]
    pub storage_gb: Option<i32>,
    /// Internal phone extension.
    #[validate(required(message = "extension is required"))]
    pub extension: Option<i32>,
}
