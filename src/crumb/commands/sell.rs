use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::SellOutcome;
use log::debug;

pub fn run(inventory: &mut Inventory, name: &str, quantity: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(product) = inventory.find_by_name_mut(name) else {
        result.add_message(CmdMessage::error(format!(
            "No product named \"{}\" in the inventory",
            name
        )));
        return Ok(result);
    };

    match product.sell(quantity) {
        SellOutcome::Sold { quantity } => {
            debug!("sold {} x {}", quantity, product.name());
            result.add_message(CmdMessage::success(format!(
                "Sold {} x {} ({} left in stock)",
                quantity,
                product.name(),
                product.quantity_on_hand()
            )));
            result.affected_products.push(product.clone());
        }
        SellOutcome::InsufficientStock { available } => {
            result.add_message(CmdMessage::warning(format!(
                "Not enough stock for {}: {} requested, {} available",
                product.name(),
                quantity,
                available
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::inventory::fixtures::InventoryFixture;

    #[test]
    fn sells_and_reports_sold_amount() {
        let mut inventory = InventoryFixture::new()
            .with_product("Cupcake", 2.50, 10)
            .inventory;

        let result = run(&mut inventory, "Cupcake", 4).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("Sold 4 x Cupcake"));
        assert_eq!(result.affected_products[0].quantity_on_hand(), 6);
        assert_eq!(
            inventory.find_by_name("Cupcake").unwrap().quantity_on_hand(),
            6
        );
    }

    #[test]
    fn sell_is_case_insensitive() {
        let mut inventory = InventoryFixture::new()
            .with_product("Torta", 8.00, 5)
            .inventory;

        let result = run(&mut inventory, "TORTA", 2).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            inventory.find_by_name("torta").unwrap().quantity_on_hand(),
            3
        );
    }

    #[test]
    fn oversell_is_rejected_in_full() {
        let mut inventory = InventoryFixture::new()
            .with_product("Cupcake", 2.50, 6)
            .inventory;

        let result = run(&mut inventory, "Cupcake", 100).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("6 available"));
        assert!(result.affected_products.is_empty());
        // No partial fulfillment
        assert_eq!(
            inventory.find_by_name("Cupcake").unwrap().quantity_on_hand(),
            6
        );
    }

    #[test]
    fn unknown_product_is_a_distinct_condition() {
        let mut inventory = InventoryFixture::new()
            .with_product("Cupcake", 2.50, 6)
            .inventory;

        let result = run(&mut inventory, "Donut", 1).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("No product named"));
        assert!(!result.messages[0].content.contains("stock"));
        // Inventory unchanged
        assert_eq!(
            inventory.find_by_name("Cupcake").unwrap().quantity_on_hand(),
            6
        );
    }

    #[test]
    fn duplicate_names_sell_from_the_first_inserted() {
        let mut inventory = InventoryFixture::new()
            .with_product("Scone", 2.00, 3)
            .with_product("Scone", 2.25, 8)
            .inventory;

        run(&mut inventory, "Scone", 2).unwrap();

        assert_eq!(inventory.products()[0].quantity_on_hand(), 1);
        assert_eq!(inventory.products()[1].quantity_on_hand(), 8);
    }
}
