use crate::models::InventoryStatus;

/// Quantities strictly below this (and above zero) are low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

impl InventoryStatus {
    /// Pure and total: `<= 0` is out of stock, `< LOW_STOCK_THRESHOLD` is low stock.
    pub fn from_quantity(quantity: i32) -> Self {
        if quantity <= 0 {
            InventoryStatus::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            InventoryStatus::LowStock
        } else {
            InventoryStatus::InStock
        }
    }
}
