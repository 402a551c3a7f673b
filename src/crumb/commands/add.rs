use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Product;
use log::debug;

pub fn run(
    inventory: &mut Inventory,
    name: String,
    unit_price: f64,
    quantity: u32,
) -> Result<CmdResult> {
    let product = Product::new(name, unit_price, quantity);
    debug!("adding product: {}", product);

    let mut result = CmdResult::default().with_affected_products(vec![product.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Product added: {}",
        product.name()
    )));
    inventory.add(product);
    Ok(result)
}
