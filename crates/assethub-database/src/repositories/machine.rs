//! Machine repository implementation.
//!
//! The unique indexes on `ip_address` and `mac_address` are the final
//! arbiter for duplicates: the service layer checks first, but a
//! concurrent insert can race past that check, so constraint violations
//! are mapped to conflict errors here.

use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_core::types::sorting::SortDirection;
use assethub_entity::machine::{Department, Machine, MachineSortKey, NewMachine};

/// Name of the unique constraint on `ip_address`.
const IP_CONSTRAINT: &str = "machines_ip_address_key";
/// Name of the unique constraint on `mac_address`.
const MAC_CONSTRAINT: &str = "machines_mac_address_key";

/// Columns matched by the free-text report filter.
const SEARCH_PREDICATE: &str = "name ILIKE $1 \
     OR department::text ILIKE $1 \
     OR ip_address ILIKE $1 \
     OR mac_address ILIKE $1 \
     OR hostname ILIKE $1";

/// Repository for machine CRUD and query operations.
#[derive(Debug, Clone)]
pub struct MachineRepository {
    pool: PgPool,
}

impl MachineRepository {
    /// Create a new machine repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a machine by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Machine>> {
        sqlx::query_as::<_, Machine>("SELECT * FROM machines WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find machine by id", e)
            })
    }

    /// List every machine in registration order.
    pub async fn find_all(&self) -> AppResult<Vec<Machine>> {
        sqlx::query_as::<_, Machine>("SELECT * FROM machines ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list machines", e))
    }

    /// Filtered, sorted, paginated report query.
    ///
    /// An empty `filter` matches everything. The sort column and direction
    /// are whitelisted enums, so interpolating them into the statement is
    /// safe; the filter term itself is always bound.
    pub async fn search(
        &self,
        filter: &str,
        sort: MachineSortKey,
        direction: SortDirection,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Machine>> {
        let order_by = format!("{} {}", sort.as_sql(), direction.as_sql());

        let (total, machines) = if filter.is_empty() {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM machines")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count machines", e)
                })?;

            let machines = sqlx::query_as::<_, Machine>(&format!(
                "SELECT * FROM machines ORDER BY {order_by} LIMIT $1 OFFSET $2"
            ))
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list machines", e)
            })?;

            (total, machines)
        } else {
            let pattern = format!("%{filter}%");

            let total: i64 = sqlx::query_scalar(&format!(
                "SELECT COUNT(*) FROM machines WHERE {SEARCH_PREDICATE}"
            ))
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count search results", e)
            })?;

            let machines = sqlx::query_as::<_, Machine>(&format!(
                "SELECT * FROM machines WHERE {SEARCH_PREDICATE} \
                 ORDER BY {order_by} LIMIT $2 OFFSET $3"
            ))
            .bind(&pattern)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search machines", e)
            })?;

            (total, machines)
        };

        Ok(PageResponse::new(
            machines,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Every machine matching the filter, without pagination (CSV export).
    pub async fn search_all(&self, filter: &str) -> AppResult<Vec<Machine>> {
        if filter.is_empty() {
            return self.find_all().await;
        }

        let pattern = format!("%{filter}%");
        sqlx::query_as::<_, Machine>(&format!(
            "SELECT * FROM machines WHERE {SEARCH_PREDICATE} ORDER BY created_at ASC"
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to export machines", e)
        })
    }

    /// Check whether an IP address is used by a record other than `exclude`.
    pub async fn ip_in_use(&self, ip_address: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                 SELECT 1 FROM machines \
                 WHERE ip_address = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(ip_address)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check IP usage", e))
    }

    /// Check whether a MAC address is used by a record other than `exclude`.
    pub async fn mac_in_use(&self, mac_address: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                 SELECT 1 FROM machines \
                 WHERE mac_address = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(mac_address)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check MAC usage", e))
    }

    /// Check whether a hostname is used by a record other than `exclude`.
    ///
    /// Comparison is exact (case-sensitive), matching the lookup behavior.
    pub async fn hostname_in_use(&self, hostname: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                 SELECT 1 FROM machines \
                 WHERE hostname = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(hostname)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check hostname usage", e)
        })
    }

    /// Insert a new machine and return the persisted row.
    ///
    /// Timestamps come from the column defaults. Runs in a transaction;
    /// a unique-constraint violation rolls back and surfaces as a
    /// conflict error naming the duplicated address.
    pub async fn create(&self, data: &NewMachine) -> AppResult<Machine> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let machine = sqlx::query_as::<_, Machine>(
            "INSERT INTO machines \
                 (name, department, ip_address, mac_address, hostname, \
                  ram_gb, storage_gb, extension) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.department)
        .bind(&data.ip_address)
        .bind(&data.mac_address)
        .bind(&data.hostname)
        .bind(data.ram_gb)
        .bind(data.storage_gb)
        .bind(data.extension)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| Self::map_unique_violation(e, data, "Failed to create machine"))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit create", e)
        })?;

        Ok(machine)
    }

    /// Replace every mutable field of an existing machine.
    ///
    /// Refreshes `updated_at`; `created_at` is never touched. Same
    /// transaction and conflict handling as [`Self::create`].
    pub async fn update(&self, id: Uuid, data: &NewMachine) -> AppResult<Machine> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let machine = sqlx::query_as::<_, Machine>(
            "UPDATE machines SET name = $2, \
                                 department = $3, \
                                 ip_address = $4, \
                                 mac_address = $5, \
                                 hostname = $6, \
                                 ram_gb = $7, \
                                 storage_gb = $8, \
                                 extension = $9, \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.department)
        .bind(&data.ip_address)
        .bind(&data.mac_address)
        .bind(&data.hostname)
        .bind(data.ram_gb)
        .bind(data.storage_gb)
        .bind(data.extension)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| Self::map_unique_violation(e, data, "Failed to update machine"))?
        .ok_or_else(|| AppError::not_found(format!("Machine {id} not found")))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit update", e)
        })?;

        Ok(machine)
    }

    /// Delete a machine by ID. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let result = sqlx::query("DELETE FROM machines WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete machine", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit delete", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total machines.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM machines")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count machines", e)
            })?;
        Ok(count as u64)
    }

    /// Count distinct departments with at least one machine.
    pub async fn count_departments(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT department) FROM machines")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count departments", e)
            })?;
        Ok(count as u64)
    }

    /// Arithmetic mean of installed RAM, zero over an empty table.
    pub async fn average_ram(&self) -> AppResult<f64> {
        sqlx::query_scalar("SELECT COALESCE(AVG(ram_gb), 0)::float8 FROM machines")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to average RAM", e))
    }

    /// Arithmetic mean of storage capacity, zero over an empty table.
    pub async fn average_storage(&self) -> AppResult<f64> {
        sqlx::query_scalar("SELECT COALESCE(AVG(storage_gb), 0)::float8 FROM machines")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to average storage", e)
            })
    }

    /// Machine counts grouped by department, most populated first.
    pub async fn department_counts(&self) -> AppResult<Vec<(Department, i64)>> {
        sqlx::query_as(
            "SELECT department, COUNT(*) FROM machines \
             GROUP BY department ORDER BY COUNT(*) DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to group by department", e)
        })
    }

    /// Machine counts grouped by RAM size, smallest first.
    pub async fn ram_counts(&self) -> AppResult<Vec<(i32, i64)>> {
        sqlx::query_as("SELECT ram_gb, COUNT(*) FROM machines GROUP BY ram_gb ORDER BY ram_gb ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to group by RAM", e))
    }

    /// Machine counts grouped by storage size, smallest first.
    pub async fn storage_counts(&self) -> AppResult<Vec<(i32, i64)>> {
        sqlx::query_as(
            "SELECT storage_gb, COUNT(*) FROM machines \
             GROUP BY storage_gb ORDER BY storage_gb ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to group by storage", e))
    }

    /// Map unique-index violations to user-facing conflict errors.
    fn map_unique_violation(e: sqlx::Error, data: &NewMachine, context: &str) -> AppError {
        match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(IP_CONSTRAINT) => {
                AppError::conflict(format!(
                    "A machine with IP address '{}' already exists",
                    data.ip_address
                ))
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(MAC_CONSTRAINT) => {
                AppError::conflict(format!(
                    "A machine with MAC address '{}' already exists",
                    data.mac_address
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, context, e),
        }
    }
}
