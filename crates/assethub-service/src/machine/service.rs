//! Machine record operations — validated create/update/delete and lookups.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_database::repositories::machine::MachineRepository;
use assethub_entity::machine::Machine;

use super::draft::MachineDraft;
use super::validate::MachineValidator;

/// Handles machine record mutations and lookups.
///
/// Every mutation validates first and then runs inside a repository
/// transaction: either the whole change commits, or nothing does.
#[derive(Debug, Clone)]
pub struct MachineService {
    /// Machine repository.
    repo: Arc<MachineRepository>,
    /// Submission validator.
    validator: MachineValidator,
}

impl MachineService {
    /// Creates a new machine service.
    pub fn new(repo: Arc<MachineRepository>) -> Self {
        Self {
            validator: MachineValidator::new(Arc::clone(&repo)),
            repo,
        }
    }

    /// Registers a new machine and returns the persisted record.
    pub async fn create(&self, draft: &MachineDraft) -> AppResult<Machine> {
        let data = self.validator.validate(draft, None).await?;

        let machine = match self.repo.create(&data).await {
            Ok(machine) => machine,
            Err(e) => {
                error!(name = %data.name, ip = %data.ip_address, error = %e,
                       "Failed to register machine");
                return Err(e);
            }
        };

        info!(id = %machine.id, name = %machine.name, ip = %machine.ip_address,
              "Machine registered");
        Ok(machine)
    }

    /// Applies a full edit to an existing machine.
    ///
    /// The record's own identifier is excluded from the uniqueness checks
    /// so an unchanged resubmission never conflicts with itself.
    pub async fn update(&self, id: Uuid, draft: &MachineDraft) -> AppResult<Machine> {
        self.get(id).await?;

        let data = self.validator.validate(draft, Some(id)).await?;

        let machine = match self.repo.update(id, &data).await {
            Ok(machine) => machine,
            Err(e) => {
                error!(id = %id, name = %data.name, error = %e, "Failed to update machine");
                return Err(e);
            }
        };

        info!(id = %machine.id, name = %machine.name, ip = %machine.ip_address,
              "Machine updated");
        Ok(machine)
    }

    /// Removes a machine and returns its display name for confirmation.
    pub async fn delete(&self, id: Uuid) -> AppResult<String> {
        let machine = self.get(id).await?;

        match self.repo.delete(id).await {
            Ok(true) => {}
            Ok(false) => return Err(AppError::not_found(format!("Machine {id} not found"))),
            Err(e) => {
                error!(id = %id, name = %machine.name, error = %e, "Failed to delete machine");
                return Err(e);
            }
        }

        info!(id = %id, name = %machine.name, "Machine deleted");
        Ok(machine.name)
    }

    /// Fetches a single machine, failing with not-found if absent.
    pub async fn get(&self, id: Uuid) -> AppResult<Machine> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Machine {id} not found")))
    }

    /// Lists every machine in registration order.
    pub async fn list_all(&self) -> AppResult<Vec<Machine>> {
        self.repo.find_all().await
    }
}
