//! Statistics dashboard aggregation.
//!
//! The repository delivers GROUP BY counts and averages; this module
//! assembles them into the dashboard payload. Percentage and rounding
//! math is pure so it can be tested without a database.

use serde::{Deserialize, Serialize};

use assethub_entity::machine::Department;

/// Per-department share of the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentSlice {
    /// Department label.
    pub name: String,
    /// Machines in this department.
    pub count: u64,
    /// Share of the total inventory, 0–100.
    pub percentage: f64,
}

/// Per-size share of the inventory (RAM or storage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeSlice {
    /// Size in gigabytes.
    pub size_gb: i32,
    /// Machines with this size.
    pub count: u64,
    /// Share of the total inventory, 0–100.
    pub percentage: f64,
}

/// The statistics dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    /// Total registered machines.
    pub total_machines: u64,
    /// Distinct departments with at least one machine.
    pub total_departments: u64,
    /// Mean installed RAM in gigabytes, one decimal.
    pub avg_ram_gb: f64,
    /// Mean storage capacity in gigabytes, one decimal.
    pub avg_storage_gb: f64,
    /// Department distribution, most populated first.
    pub departments: Vec<DepartmentSlice>,
    /// RAM size distribution, smallest first.
    pub ram_distribution: Vec<SizeSlice>,
    /// Storage size distribution, smallest first.
    pub storage_distribution: Vec<SizeSlice>,
}

/// Assemble the dashboard from repository aggregates.
///
/// The count vectors arrive already ordered (departments by count
/// descending, sizes ascending); ordering is preserved here.
pub fn assemble(
    total_machines: u64,
    total_departments: u64,
    avg_ram_gb: f64,
    avg_storage_gb: f64,
    department_counts: Vec<(Department, i64)>,
    ram_counts: Vec<(i32, i64)>,
    storage_counts: Vec<(i32, i64)>,
) -> Statistics {
    Statistics {
        total_machines,
        total_departments,
        avg_ram_gb: round_one(avg_ram_gb),
        avg_storage_gb: round_one(avg_storage_gb),
        departments: department_counts
            .into_iter()
            .map(|(department, count)| DepartmentSlice {
                name: department.as_str().to_string(),
                count: count as u64,
                percentage: percentage(count as u64, total_machines),
            })
            .collect(),
        ram_distribution: size_slices(ram_counts, total_machines),
        storage_distribution: size_slices(storage_counts, total_machines),
    }
}

fn size_slices(counts: Vec<(i32, i64)>, total: u64) -> Vec<SizeSlice> {
    counts
        .into_iter()
        .map(|(size_gb, count)| SizeSlice {
            size_gb,
            count: count as u64,
            percentage: percentage(count as u64, total),
        })
        .collect()
}

/// `count / total × 100`, zero when the inventory is empty.
fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Round to one decimal place.
fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inventory_is_all_zeroes() {
        let stats = assemble(0, 0, 0.0, 0.0, Vec::new(), Vec::new(), Vec::new());
        assert_eq!(stats.total_machines, 0);
        assert_eq!(stats.avg_ram_gb, 0.0);
        assert!(stats.departments.is_empty());
        assert!(stats.ram_distribution.is_empty());
        assert!(stats.storage_distribution.is_empty());
    }

    #[test]
    fn test_department_percentages_sum_to_100() {
        let stats = assemble(
            8,
            3,
            16.0,
            512.0,
            vec![
                (Department::Ti, 4),
                (Department::Vendas, 3),
                (Department::Rh, 1),
            ],
            Vec::new(),
            Vec::new(),
        );
        let sum: f64 = stats.departments.iter().map(|d| d.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(stats.departments[0].name, "TI");
        assert_eq!(stats.departments[0].percentage, 50.0);
    }

    #[test]
    fn test_averages_round_to_one_decimal() {
        let stats = assemble(3, 1, 16.6666, 341.3333, Vec::new(), Vec::new(), Vec::new());
        assert_eq!(stats.avg_ram_gb, 16.7);
        assert_eq!(stats.avg_storage_gb, 341.3);
    }

    #[test]
    fn test_size_distribution_order_is_preserved() {
        let stats = assemble(
            6,
            1,
            0.0,
            0.0,
            Vec::new(),
            vec![(8, 1), (16, 3), (32, 2)],
            Vec::new(),
        );
        let sizes: Vec<i32> = stats.ram_distribution.iter().map(|s| s.size_gb).collect();
        assert_eq!(sizes, vec![8, 16, 32]);
        assert_eq!(stats.ram_distribution[1].percentage, 50.0);
    }
}
