//! Sample rows shown when a page session starts.
//!
//! The app has no persistence; each screen seeds its store with these
//! rows for the lifetime of the view.

use chrono::NaiveDate;

use crate::sale::{Sale, SaleStatus};
use crate::user::{Role, User};

fn user(id: &str, name: &str, email: &str, role: Role, permissions: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        permissions: permissions.to_string(),
    }
}

/// The seven demo users of the system.
pub fn sample_users() -> Vec<User> {
    vec![
        user(
            "1",
            "Juan Pérez",
            "juan.perez@petmanager.com",
            Role::Admin,
            "usuarios, ventas, compras",
        ),
        user(
            "2",
            "María García",
            "maria.garcia@petmanager.com",
            Role::User,
            "ventas",
        ),
        user(
            "3",
            "Carlos López",
            "carlos.lopez@petmanager.com",
            Role::User,
            "ventas, compras",
        ),
        user(
            "4",
            "Ana Martínez",
            "ana.martinez@petmanager.com",
            Role::User,
            "compras",
        ),
        user(
            "5",
            "Pedro Sánchez",
            "pedro.sanchez@petmanager.com",
            Role::Guest,
            "consulta",
        ),
        user(
            "6",
            "Laura Rodríguez",
            "laura.rodriguez@petmanager.com",
            Role::User,
            "ventas",
        ),
        user(
            "7",
            "Miguel Fernández",
            "miguel.fernandez@petmanager.com",
            Role::Guest,
            "consulta",
        ),
    ]
}

fn sale(id: &str, date: (i32, u32, u32), customer: &str, total: f64, status: SaleStatus) -> Sale {
    Sale {
        id: id.to_string(),
        // Seed dates are literals and always valid.
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        customer: customer.to_string(),
        total,
        status,
    }
}

/// The seven demo rows of the sales register.
pub fn sample_sales() -> Vec<Sale> {
    vec![
        sale("1", (2023, 5, 15), "Juan Pérez", 120.5, SaleStatus::Completed),
        sale("2", (2023, 5, 14), "María García", 85.75, SaleStatus::Completed),
        sale("3", (2023, 5, 13), "Carlos López", 200.0, SaleStatus::Pending),
        sale("4", (2023, 5, 12), "Ana Martínez", 150.25, SaleStatus::Completed),
        sale("5", (2023, 5, 11), "Pedro Sánchez", 95.0, SaleStatus::Cancelled),
        sale("6", (2023, 5, 10), "Laura Rodríguez", 180.3, SaleStatus::Completed),
        sale(
            "7",
            (2023, 5, 9),
            "Miguel Fernández",
            220.45,
            SaleStatus::Pending,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[test]
    fn test_seeds_have_seven_unique_rows() {
        assert_eq!(RecordStore::seeded(sample_users()).len(), 7);
        assert_eq!(RecordStore::seeded(sample_sales()).len(), 7);
    }

    #[test]
    fn test_filter_perez_finds_single_sale() {
        let store = RecordStore::seeded(sample_sales());

        let visible = store.filter("Pérez");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[0].customer, "Juan Pérez");
    }

    #[test]
    fn test_delete_user_three_leaves_six_rows() {
        let mut store = RecordStore::seeded(sample_users());

        assert!(store.remove("3").is_some());
        assert_eq!(store.len(), 6);
        assert!(!store.contains("3"));
    }

    #[test]
    fn test_sales_seed_matches_register() {
        let sales = sample_sales();

        assert_eq!(sales[0].date, NaiveDate::from_ymd_opt(2023, 5, 15).unwrap());
        assert_eq!(sales[0].formatted_total(), "$120.50");
        assert_eq!(sales[4].status, SaleStatus::Cancelled);
        assert_eq!(sales[6].customer, "Miguel Fernández");
    }

    #[test]
    fn test_next_id_after_seed() {
        let store = RecordStore::seeded(sample_users());
        assert_eq!(store.next_id(), "8");
    }
}
