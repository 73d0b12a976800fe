//! Field validation for machine submissions.
//!
//! Rules are applied in the order the form surfaces them and every
//! violation is collected before the submission is rejected, so the user
//! sees all problems at once. Uniqueness probes only run for fields whose
//! format checks passed, and always exclude the record being edited so a
//! resubmitted record never conflicts with itself.

use std::net::IpAddr;
use std::sync::Arc;

use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use assethub_core::error::{AppError, FieldViolation};
use assethub_core::result::AppResult;
use assethub_database::repositories::machine::MachineRepository;
use assethub_entity::machine::{Department, NewMachine};

use super::draft::MachineDraft;

/// Validates machine submissions against format and uniqueness rules.
#[derive(Debug, Clone)]
pub struct MachineValidator {
    /// Repository used for uniqueness probes.
    repo: Arc<MachineRepository>,
}

impl MachineValidator {
    /// Create a new validator backed by the given repository.
    pub fn new(repo: Arc<MachineRepository>) -> Self {
        Self { repo }
    }

    /// Validate a submission, returning the typed field set on success.
    ///
    /// `exclude` carries the identifier of the record being edited, if
    /// any; that record is ignored by the uniqueness probes.
    pub async fn validate(
        &self,
        draft: &MachineDraft,
        exclude: Option<Uuid>,
    ) -> AppResult<NewMachine> {
        let mut violations: Vec<FieldViolation> = Vec::new();
        let derive_errors = draft.validate().err();

        // name
        if draft.name.trim().is_empty() {
            violations.push(FieldViolation::new("name", "name is required"));
        } else {
            push_derive_errors(derive_errors.as_ref(), "name", &mut violations);
        }

        // department
        let department = if draft.department.is_empty() {
            violations.push(FieldViolation::new("department", "department is required"));
            None
        } else {
            match draft.department.parse::<Department>() {
                Ok(department) => Some(department),
                Err(_) => {
                    violations.push(FieldViolation::new(
                        "department",
                        "department must be one of the fixed organizational units",
                    ));
                    None
                }
            }
        };

        // ip_address
        if draft.ip_address.is_empty() {
            violations.push(FieldViolation::new("ip_address", "ip_address is required"));
        } else if draft.ip_address.parse::<IpAddr>().is_err() {
            violations.push(FieldViolation::new("ip_address", "invalid IP address"));
        } else if self.repo.ip_in_use(&draft.ip_address, exclude).await? {
            violations.push(FieldViolation::new(
                "ip_address",
                "this IP address is already in use",
            ));
        }

        // mac_address
        if draft.mac_address.is_empty() {
            violations.push(FieldViolation::new("mac_address", "mac_address is required"));
        } else if !is_valid_mac(&draft.mac_address) {
            violations.push(FieldViolation::new(
                "mac_address",
                "invalid MAC address format, use XX:XX:XX:XX:XX:XX",
            ));
        } else if self.repo.mac_in_use(&draft.mac_address, exclude).await? {
            violations.push(FieldViolation::new(
                "mac_address",
                "this MAC address is already in use",
            ));
        }

        // hostname
        if draft.hostname.is_empty() {
            violations.push(FieldViolation::new("hostname", "hostname is required"));
        } else {
            push_derive_errors(derive_errors.as_ref(), "hostname", &mut violations);
            if draft.hostname.len() >= 3
                && self.repo.hostname_in_use(&draft.hostname, exclude).await?
            {
                violations.push(FieldViolation::new(
                    "hostname",
                    "this hostname is already in use",
                ));
            }
        }

        // ram_gb / storage_gb / extension
        push_derive_errors(derive_errors.as_ref(), "ram_gb", &mut violations);
        push_derive_errors(derive_errors.as_ref(), "storage_gb", &mut violations);
        push_derive_errors(derive_errors.as_ref(), "extension", &mut violations);

        if !violations.is_empty() {
            return Err(AppError::validation_failed(violations));
        }

        match (department, draft.ram_gb, draft.storage_gb, draft.extension) {
            (Some(department), Some(ram_gb), Some(storage_gb), Some(extension)) => Ok(NewMachine {
                name: draft.name.clone(),
                department,
                ip_address: draft.ip_address.clone(),
                mac_address: draft.mac_address.clone(),
                hostname: draft.hostname.clone(),
                ram_gb,
                storage_gb,
                extension,
            }),
            // Unreachable: a missing value above always pushed a violation.
            _ => Err(AppError::internal("Validated draft missing fields")),
        }
    }
}

/// Check the 6-octet hex-pair MAC form (`:` or `-` separators).
///
/// Mixed separators are accepted, matching the original pattern
/// `([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}`.
pub fn is_valid_mac(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 17 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| {
        if i % 3 == 2 {
            *b == b':' || *b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    })
}

/// Copy the derive-generated violations for one field, in declaration order.
fn push_derive_errors(
    errors: Option<&ValidationErrors>,
    field: &'static str,
    out: &mut Vec<FieldViolation>,
) {
    let Some(errors) = errors else { return };
    if let Some(field_errors) = errors.field_errors().get(field) {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            out.push(FieldViolation::new(field, message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

    fn offline_validator() -> MachineValidator {
        // A lazily-connected pool: format-only validation never touches it.
        let pool = PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new());
        MachineValidator::new(Arc::new(MachineRepository::new(pool)))
    }

    #[test]
    fn test_mac_accepts_colon_hyphen_and_mixed_separators() {
        assert!(is_valid_mac("AA:BB:CC:DD:EE:01"));
        assert!(is_valid_mac("aa-bb-cc-dd-ee-01"));
        assert!(is_valid_mac("AA:BB-CC:DD-EE:01"));
    }

    #[test]
    fn test_mac_rejects_malformed_values() {
        assert!(!is_valid_mac(""));
        assert!(!is_valid_mac("AA:BB:CC:DD:EE"));
        assert!(!is_valid_mac("AA:BB:CC:DD:EE:0G"));
        assert!(!is_valid_mac("AABBCCDDEE01"));
        assert!(!is_valid_mac("AA:BB:CC:DD:EE:01:23"));
        assert!(!is_valid_mac("AA.BB.CC.DD.EE.01"));
    }

    #[tokio::test]
    async fn test_invalid_draft_collects_every_violation_in_field_order() {
        let draft = MachineDraft {
            name: String::new(),
            department: "Jurídico".to_string(),
            ip_address: "999.0.0.1".to_string(),
            mac_address: "not-a-mac".to_string(),
            hostname: "ab".to_string(),
            ram_gb: None,
            storage_gb: None,
            extension: None,
        };

        let err = offline_validator()
            .validate(&draft, None)
            .await
            .expect_err("draft must be rejected");

        let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "department",
                "ip_address",
                "mac_address",
                "hostname",
                "ram_gb",
                "storage_gb",
                "extension"
            ]
        );
    }

    #[tokio::test]
    async fn test_format_messages_are_field_specific() {
        let draft = MachineDraft {
            name: "x".to_string(),
            department: String::new(),
            ip_address: "10.0.0".to_string(),
            mac_address: "AA:BB:CC:DD:EE".to_string(),
            hostname: String::new(),
            ram_gb: Some(16),
            storage_gb: Some(512),
            extension: Some(1001),
        };

        let err = offline_validator()
            .validate(&draft, None)
            .await
            .expect_err("draft must be rejected");

        let by_field = |field: &str| {
            err.violations
                .iter()
                .find(|v| v.field == field)
                .map(|v| v.message.clone())
                .unwrap_or_default()
        };

        assert_eq!(by_field("name"), "name must be between 2 and 100 characters");
        assert_eq!(by_field("department"), "department is required");
        assert_eq!(by_field("ip_address"), "invalid IP address");
        assert_eq!(
            by_field("mac_address"),
            "invalid MAC address format, use XX:XX:XX:XX:XX:XX"
        );
        assert_eq!(by_field("hostname"), "hostname is required");
    }

    #[test]
    fn test_ip_parsing_covers_v4_and_v6() {
        assert!("10.0.0.5".parse::<IpAddr>().is_ok());
        assert!("fe80::1".parse::<IpAddr>().is_ok());
        assert!("10.0.0".parse::<IpAddr>().is_err());
        assert!("300.1.1.1".parse::<IpAddr>().is_err());
    }
}
