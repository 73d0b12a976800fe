//! Department enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Organizational units a machine can be assigned to.
///
/// The set is fixed; submissions carrying any other value are rejected by
/// validation before reaching the database. Stored as the `department`
/// Postgres enum using the labels below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "department")]
pub enum Department {
    /// Tecnologia da Informação.
    #[sqlx(rename = "TI")]
    #[serde(rename = "TI")]
    Ti,
    #[sqlx(rename = "Operações")]
    #[serde(rename = "Operações")]
    Operacoes,
    #[sqlx(rename = "Administração")]
    #[serde(rename = "Administração")]
    Administracao,
    #[sqlx(rename = "Controladoria")]
    #[serde(rename = "Controladoria")]
    Controladoria,
    #[sqlx(rename = "Fiscal")]
    #[serde(rename = "Fiscal")]
    Fiscal,
    /// Recursos Humanos.
    #[sqlx(rename = "RH")]
    #[serde(rename = "RH")]
    Rh,
    #[sqlx(rename = "Marketing")]
    #[serde(rename = "Marketing")]
    Marketing,
    #[sqlx(rename = "Vendas")]
    #[serde(rename = "Vendas")]
    Vendas,
    #[sqlx(rename = "Diretoria")]
    #[serde(rename = "Diretoria")]
    Diretoria,
    #[sqlx(rename = "Engenharia")]
    #[serde(rename = "Engenharia")]
    Engenharia,
    #[sqlx(rename = "Manutenção")]
    #[serde(rename = "Manutenção")]
    Manutencao,
}

impl Department {
    /// Every department, in form-display order.
    pub const ALL: [Department; 11] = [
        Self::Ti,
        Self::Operacoes,
        Self::Administracao,
        Self::Controladoria,
        Self::Fiscal,
        Self::Rh,
        Self::Marketing,
        Self::Vendas,
        Self::Diretoria,
        Self::Engenharia,
        Self::Manutencao,
    ];

    /// Return the canonical department label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ti => "TI",
            Self::Operacoes => "Operações",
            Self::Administracao => "Administração",
            Self::Controladoria => "Controladoria",
            Self::Fiscal => "Fiscal",
            Self::Rh => "RH",
            Self::Marketing => "Marketing",
            Self::Vendas => "Vendas",
            Self::Diretoria => "Diretoria",
            Self::Engenharia => "Engenharia",
            Self::Manutencao => "Manutenção",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Department {
    type Err = assethub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|d| d.as_str() == s)
            .copied()
            .ok_or_else(|| {
                assethub_core::AppError::validation(format!("Invalid department: '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_every_label() {
        for dept in Department::ALL {
            assert_eq!(dept.as_str().parse::<Department>().unwrap(), dept);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!("Jurídico".parse::<Department>().is_err());
        // Comparison is exact, not case-insensitive.
        assert!("ti".parse::<Department>().is_err());
    }
}
