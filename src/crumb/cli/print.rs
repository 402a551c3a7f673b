use colored::Colorize;
use crumb::commands::{CmdMessage, MessageLevel};
use crumb::model::Product;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(content: &str) {
    println!("{}", content.red());
}

/// Aligned product listing. The name column is sized to the widest name in
/// the batch (unicode-aware), prices are right-aligned.
pub(super) fn print_products(products: &[Product], currency: &str) {
    if products.is_empty() {
        return;
    }

    let name_width = products
        .iter()
        .map(|p| p.name().width())
        .max()
        .unwrap_or(0);

    for product in products {
        let padding = name_width.saturating_sub(product.name().width());
        let price = format!("{}{:.2}", currency, product.unit_price());
        println!(
            "  {}{}  {:>9}  {:>4} in stock",
            product.name().bold(),
            " ".repeat(padding),
            price,
            product.quantity_on_hand()
        );
    }
}
