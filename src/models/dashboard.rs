use serde::{Deserialize, Serialize};
use crate::utils::constants::{ACTIVE_LOANS_ID, TOTAL_GROUPS_ID, TOTAL_MEMBERS_ID, TOTAL_SAVINGS_ID};
use crate::utils::format::format_currency;

/// Resumen del dashboard tal como lo devuelve `/api/dashboard/stats/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_groups: u64,
    pub total_members: u64,
    pub active_loans: u64,
    pub total_savings: f64,
}

/// Campo del panel y el elemento del DOM donde se muestra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    TotalGroups,
    TotalMembers,
    ActiveLoans,
    TotalSavings,
}

impl StatField {
    pub const ALL: [StatField; 4] = [
        StatField::TotalGroups,
        StatField::TotalMembers,
        StatField::ActiveLoans,
        StatField::TotalSavings,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            StatField::TotalGroups => TOTAL_GROUPS_ID,
            StatField::TotalMembers => TOTAL_MEMBERS_ID,
            StatField::ActiveLoans => ACTIVE_LOANS_ID,
            StatField::TotalSavings => TOTAL_SAVINGS_ID,
        }
    }
}

impl DashboardStats {
    /// Validar lo que serde no puede expresar (ahorro no negativo y finito)
    pub fn validate(&self) -> Result<(), String> {
        if !self.total_savings.is_finite() || self.total_savings < 0.0 {
            return Err(format!("total_savings inválido: {}", self.total_savings));
        }
        Ok(())
    }

    /// Texto a mostrar en cada elemento, en el orden de `StatField::ALL`
    pub fn display_values(&self, currency_prefix: &str) -> [(StatField, String); 4] {
        [
            (StatField::TotalGroups, self.total_groups.to_string()),
            (StatField::TotalMembers, self.total_members.to_string()),
            (StatField::ActiveLoans, self.active_loans.to_string()),
            (StatField::TotalSavings, format_currency(currency_prefix, self.total_savings)),
        ]
    }
}
