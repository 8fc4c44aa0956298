//! Sales records and the new-sale form draft.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::store::Record;

/// Settlement state of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleStatus {
    Completed,
    Pending,
    Cancelled,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Completed,
        SaleStatus::Pending,
        SaleStatus::Cancelled,
    ];

    /// CSS class suffix for the status pill.
    pub fn css_class(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "completed",
            SaleStatus::Pending => "pending",
            SaleStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SaleStatus::Completed => "Completed",
            SaleStatus::Pending => "Pending",
            SaleStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

impl FromStr for SaleStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Completed" => Ok(SaleStatus::Completed),
            "Pending" => Ok(SaleStatus::Pending),
            "Cancelled" => Ok(SaleStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// One row of the sales register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub date: NaiveDate,
    pub customer: String,
    /// Non-negative currency amount.
    pub total: f64,
    pub status: SaleStatus,
}

impl Sale {
    /// Total rendered as `$NN.NN` for the table.
    pub fn formatted_total(&self) -> String {
        format!("${:.2}", self.total)
    }
}

impl Record for Sale {
    fn id(&self) -> &str {
        &self.id
    }

    // Searchable fields: customer name and id.
    fn matches(&self, needle: &str) -> bool {
        self.customer.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}

/// Uncommitted state of the new-sale form.
///
/// The original screen collected user-shaped fields here by mistake;
/// this form collects the fields of the sale itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleDraft {
    pub id: String,
    pub date: String,
    pub customer: String,
    pub total: String,
    pub status: String,
}

impl SaleDraft {
    pub fn build(&self) -> Result<Sale, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.id.trim().is_empty() {
            errors.push("id", "El ID es obligatorio");
        }
        let date = match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push("date", "La fecha debe tener formato AAAA-MM-DD");
                None
            }
        };
        if self.customer.trim().is_empty() {
            errors.push("customer", "El cliente es obligatorio");
        }
        let total = match self.total.trim().parse::<f64>() {
            Ok(total) if total >= 0.0 => Some(total),
            Ok(_) => {
                errors.push("total", "El total no puede ser negativo");
                None
            }
            Err(_) => {
                errors.push("total", "El total debe ser un número");
                None
            }
        };
        let status = match self.status.parse::<SaleStatus>() {
            Ok(status) => Some(status),
            Err(()) => {
                errors.push("status", "Seleccione un estado");
                None
            }
        };

        errors.into_result()?;
        Ok(Sale {
            id: self.id.trim().to_string(),
            // All validated above.
            date: date.unwrap_or_default(),
            customer: self.customer.trim().to_string(),
            total: total.unwrap_or_default(),
            status: status.unwrap_or(SaleStatus::Pending),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SaleDraft {
        SaleDraft {
            id: "8".to_string(),
            date: "2023-05-16".to_string(),
            customer: "Sofía Díaz".to_string(),
            total: "45.90".to_string(),
            status: "Pending".to_string(),
        }
    }

    #[test]
    fn test_build_valid_draft() {
        let sale = draft().build().unwrap();

        assert_eq!(sale.id, "8");
        assert_eq!(sale.date, NaiveDate::from_ymd_opt(2023, 5, 16).unwrap());
        assert_eq!(sale.status, SaleStatus::Pending);
        assert!((sale.total - 45.90).abs() < f64::EPSILON);
    }

    #[test]
    fn test_build_rejects_empty_fields() {
        let err = SaleDraft::default().build().unwrap_err();

        for field in ["id", "date", "customer", "total", "status"] {
            assert!(err.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn test_build_rejects_bad_date() {
        let mut d = draft();
        d.date = "16/05/2023".to_string();

        let err = d.build().unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.get("date").is_some());
    }

    #[test]
    fn test_build_rejects_negative_total() {
        let mut d = draft();
        d.total = "-3".to_string();

        let err = d.build().unwrap_err();
        assert!(err.get("total").is_some());
    }

    #[test]
    fn test_build_rejects_non_numeric_total() {
        let mut d = draft();
        d.total = "mucho".to_string();

        let err = d.build().unwrap_err();
        assert!(err.get("total").is_some());
    }

    #[test]
    fn test_formatted_total_pads_cents() {
        let mut sale = draft().build().unwrap();
        sale.total = 120.5;

        assert_eq!(sale.formatted_total(), "$120.50");
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in SaleStatus::ALL {
            assert_eq!(status.to_string().parse::<SaleStatus>(), Ok(status));
        }
        assert!("Refunded".parse::<SaleStatus>().is_err());
    }

    #[test]
    fn test_sale_matches_customer_and_id() {
        let sale = draft().build().unwrap();

        assert!(sale.matches("sofía"));
        assert!(sale.matches("8"));
        assert!(!sale.matches("pérez"));
    }

    #[test]
    fn test_sale_serialization_round_trip() {
        let sale = draft().build().unwrap();

        let json = serde_json::to_string(&sale).unwrap();
        let parsed: Sale = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sale);
    }
}
