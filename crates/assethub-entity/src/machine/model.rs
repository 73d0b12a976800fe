//! Machine entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::department::Department;

/// A registered workstation in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Machine {
    /// Unique machine identifier.
    pub id: Uuid,
    /// Display name of the machine.
    pub name: String,
    /// Department the machine belongs to.
    pub department: Department,
    /// IPv4 or IPv6 address, unique across the inventory.
    pub ip_address: String,
    /// MAC address in 6-octet hex-pair form, unique across the inventory.
    pub mac_address: String,
    /// Network hostname.
    pub hostname: String,
    /// Installed RAM in gigabytes.
    pub ram_gb: i32,
    /// Storage capacity in gigabytes.
    pub storage_gb: i32,
    /// Internal phone extension.
    pub extension: i32,
    /// When the machine was registered.
    pub created_at: DateTime<Utc>,
    /// When the machine was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Validated field set for inserting or fully replacing a machine.
///
/// Produced by the validation layer from a raw submission; by the time a
/// value of this type exists, every format rule has already passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMachine {
    /// Display name.
    pub name: String,
    /// Assigned department.
    pub department: Department,
    /// IP address as submitted.
    pub ip_address: String,
    /// MAC address as submitted.
    pub mac_address: String,
    /// Hostname.
    pub hostname: String,
    /// Installed RAM in gigabytes.
    pub ram_gb: i32,
    /// Storage capacity in gigabytes.
    pub storage_gb: i32,
    /// Internal phone extension.
    pub extension: i32,
}
