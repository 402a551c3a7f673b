//! The interactive menu loop.
//!
//! Reads operator input line by line, validates it at the boundary, and
//! dispatches to the API. A validation failure abandons the single attempted
//! operation and redisplays the menu; end of input behaves like the exit
//! choice so piped sessions terminate cleanly.

use super::print;
use crumb::api::CrumbApi;
use crumb::config::CrumbConfig;
use crumb::error::{CrumbError, Result};
use crumb::validate;
use std::io::{self, BufRead, Write};

pub fn run<R: BufRead>(api: &mut CrumbApi, config: &CrumbConfig, input: &mut R) -> Result<()> {
    loop {
        show_menu()?;
        let Some(choice) = read_line(input)? else {
            break;
        };

        let outcome = match choice.trim() {
            "1" => handle_add(api, config, input),
            "2" => handle_list(api, config),
            "3" => handle_sell(api, input),
            "4" => {
                println!("Goodbye.");
                break;
            }
            _ => {
                print::print_error("Invalid option, try again.");
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            // Rejected input ends the attempted operation, not the session
            Err(CrumbError::InvalidInput(reason)) => print::print_error(&reason),
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn handle_add<R: BufRead>(api: &mut CrumbApi, config: &CrumbConfig, input: &mut R) -> Result<()> {
    let Some(raw_name) = prompt(input, "Product name: ")? else {
        return Ok(());
    };
    let name = validate::parse_product_name(&raw_name)?;

    let Some(raw_price) = prompt(input, "Unit price: ")? else {
        return Ok(());
    };
    let unit_price = validate::parse_price(&raw_price)?;

    let Some(raw_quantity) = prompt(input, "Quantity available: ")? else {
        return Ok(());
    };
    let quantity = validate::parse_initial_quantity(&raw_quantity)?;

    let result = api.add_product(name, unit_price, quantity)?;
    print::print_messages(&result.messages);
    print::print_products(&result.affected_products, &config.currency);
    Ok(())
}

fn handle_list(api: &CrumbApi, config: &CrumbConfig) -> Result<()> {
    let result = api.list_products()?;
    print::print_messages(&result.messages);
    print::print_products(&result.listed_products, &config.currency);
    Ok(())
}

fn handle_sell<R: BufRead>(api: &mut CrumbApi, input: &mut R) -> Result<()> {
    let Some(raw_name) = prompt(input, "Product to sell: ")? else {
        return Ok(());
    };
    let name = validate::parse_product_name(&raw_name)?;

    let Some(raw_quantity) = prompt(input, "Quantity to sell: ")? else {
        return Ok(());
    };
    let quantity = validate::parse_sale_quantity(&raw_quantity)?;

    let result = api.sell_product(&name, quantity)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn show_menu() -> Result<()> {
    println!();
    println!("Menu:");
    println!("  1. Add a product");
    println!("  2. Show inventory");
    println!("  3. Sell a product");
    println!("  4. Exit");
    print!("Select an option: ");
    io::stdout().flush()?;
    Ok(())
}

fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    read_line(input)
}

/// One line of operator input, without the trailing newline. `None` at end
/// of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
