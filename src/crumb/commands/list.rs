use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    // An empty inventory is reported explicitly, not as a silent empty list.
    if inventory.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("The inventory is empty."));
        return Ok(result);
    }

    Ok(CmdResult::default().with_listed_products(inventory.products().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::inventory::fixtures::InventoryFixture;

    #[test]
    fn empty_inventory_reports_a_message_not_a_bare_list() {
        let inventory = Inventory::new();
        let result = run(&inventory).unwrap();

        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("empty"));
    }

    #[test]
    fn lists_products_in_insertion_order() {
        let inventory = InventoryFixture::new()
            .with_product("Croissant", 1.80, 12)
            .with_product("Baguette", 3.00, 5)
            .inventory;

        let result = run(&inventory).unwrap();
        let names: Vec<_> = result.listed_products.iter().map(|p| p.name()).collect();

        assert_eq!(names, vec!["Croissant", "Baguette"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn lists_every_product() {
        let inventory = InventoryFixture::new().with_products(3).inventory;

        let result = run(&inventory).unwrap();
        assert_eq!(result.listed_products.len(), 3);
    }
}
