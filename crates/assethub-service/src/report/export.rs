//! CSV rendering for the inventory export.

use chrono::{DateTime, Utc};

use assethub_core::types::datetime::format_timestamp;
use assethub_entity::machine::Machine;

/// Header row of the exported file.
///
/// Kept byte-identical to the report consumed downstream. Note that data
/// rows carry ten values: the extension column has always been written
/// between `SSD (GB)` and the dates without a matching header, and
/// consumers rely on the positions.
pub const CSV_HEADER: &str = "Nome,Departamento,Endereço IP,MAC Address,Hostname,\
Memória RAM (GB),SSD (GB),Data de Cadastro,Ultima Atualizacao";

/// A rendered export ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct CsvExport {
    /// Timestamped attachment filename.
    pub filename: String,
    /// Complete file contents.
    pub content: String,
}

/// Render the machines into a single in-memory CSV buffer.
pub fn render_csv(machines: &[Machine]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for machine in machines {
        let row = [
            csv_field(&machine.name),
            csv_field(machine.department.as_str()),
            csv_field(&machine.ip_address),
            csv_field(&machine.mac_address),
            csv_field(&machine.hostname),
            machine.ram_gb.to_string(),
            machine.storage_gb.to_string(),
            machine.extension.to_string(),
            format_timestamp(machine.created_at),
            format_timestamp(machine.updated_at),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Timestamped filename for the download attachment.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("maquinas_hbr_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assethub_entity::machine::Department;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn machine(name: &str) -> Machine {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        Machine {
            id: Uuid::new_v4(),
            name: name.to_string(),
            department: Department::Ti,
            ip_address: "10.0.0.5".to_string(),
            mac_address: "AA:BB:CC:DD:EE:01".to_string(),
            hostname: "pc01".to_string(),
            ram_gb: 16,
            storage_gb: 512,
            extension: 1001,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_empty_store_renders_header_only() {
        let out = render_csv(&[]);
        assert_eq!(out, format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn test_n_machines_render_n_plus_one_lines() {
        let machines = vec![machine("PC-01"), machine("PC-02"), machine("PC-03")];
        let out = render_csv(&machines);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_rows_carry_ten_values_and_day_first_dates() {
        let out = render_csv(&[machine("PC-01")]);
        let row = out.lines().nth(1).expect("data row");
        let values: Vec<&str> = row.split(',').collect();
        assert_eq!(values.len(), 10);
        assert_eq!(values[5], "16");
        assert_eq!(values[7], "1001");
        assert_eq!(values[8], "15/01/2025 09:30");
        assert_eq!(values[9], "15/01/2025 09:30");
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let mut m = machine("Sala 3, mesa 2");
        m.hostname = "host\"01".to_string();
        let out = render_csv(&[m]);
        let row = out.lines().nth(1).expect("data row");
        assert!(row.starts_with("\"Sala 3, mesa 2\","));
        assert!(row.contains("\"host\"\"01\""));
    }

    #[test]
    fn test_export_filename_is_timestamped() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 59).unwrap();
        assert_eq!(export_filename(now), "maquinas_hbr_20250115_093059.csv");
    }
}
