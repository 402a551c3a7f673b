//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single entry
//! point for all inventory operations regardless of the UI driving them.
//!
//! It dispatches to the appropriate command function and returns structured
//! `Result<CmdResult>` values. It performs no business logic (that lives in
//! `commands/*.rs`), no I/O, and no presentation; callers render the
//! results however they like.
//!
//! The facade owns the [`Inventory`] for the session. There is no global
//! instance: construct a `CrumbApi`, hand it to the UI, and the inventory
//! dies with the process.

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Product;

/// The main API facade for crumb operations.
pub struct CrumbApi {
    inventory: Inventory,
}

impl Default for CrumbApi {
    fn default() -> Self {
        Self::new()
    }
}

impl CrumbApi {
    pub fn new() -> Self {
        Self {
            inventory: Inventory::new(),
        }
    }

    pub fn add_product(
        &mut self,
        name: String,
        unit_price: f64,
        quantity: u32,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, name, unit_price, quantity)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn sell_product(&mut self, name: &str, quantity: u32) -> Result<commands::CmdResult> {
        commands::sell::run(&mut self.inventory, name, quantity)
    }

    /// Read-only access, for callers that want to inspect state directly.
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.inventory.find_by_name(name)
    }
}
