use crate::db_models::{Customer, CustomerProductRow, Employee, InventoryItem};

/// Case-insensitive substring match over the fields a listing is searchable
/// by. `needle` is already lowercased by the caller.
pub trait Searchable {
    fn matches(&self, needle: &str) -> bool;
}

fn contains(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

fn contains_opt(field: &Option<String>, needle: &str) -> bool {
    field.as_deref().is_some_and(|value| contains(value, needle))
}

impl Searchable for Customer {
    fn matches(&self, needle: &str) -> bool {
        contains(&self.name, needle)
            || contains(&self.primary_mobile, needle)
            || contains(&self.address, needle)
    }
}

impl Searchable for InventoryItem {
    fn matches(&self, needle: &str) -> bool {
        contains(&self.product_name, needle) || contains_opt(&self.description, needle)
    }
}

impl Searchable for Employee {
    fn matches(&self, needle: &str) -> bool {
        contains(&self.name, needle)
            || contains(&self.mobile, needle)
            || contains(&self.address, needle)
            || contains_opt(&self.branch_name, needle)
    }
}

impl Searchable for CustomerProductRow {
    fn matches(&self, needle: &str) -> bool {
        contains(&self.customer_name, needle)
            || contains_opt(&self.product_name, needle)
            || contains(&self.serial_number, needle)
    }
}
