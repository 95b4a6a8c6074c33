pub mod coffee_shop;
pub mod composition;
pub mod constants;
pub mod customer;
pub mod errors;
pub mod ingredient;
pub mod inventory;
pub mod machine;
pub mod order;
pub mod recipe;
pub mod resolver;
pub mod scenario_reader;
pub mod spawner;
pub mod statistics;

use std::env;

use log::error;

use coffee_shop::CoffeeShop;
use constants::{SESSION_TICKS, SHOP_LEVEL};
use inventory::InventoryLedger;
use recipe::RecipeCatalog;
use spawner::CustomerSpawner;

fn main() {
    if simple_logger::init_with_level(log::Level::Info).is_err() {
        eprintln!("Could not initialize the logger");
    }

    let mut shop = CoffeeShop::new(InventoryLedger::with_default_stock(), RecipeCatalog::new());
    match env::args().nth(1) {
        Some(path) => match scenario_reader::read_scenario(&path) {
            Ok(customers) => shop.run_scripted(customers, SESSION_TICKS),
            Err(e) => error!("[MAIN] Could not load the scenario: {:?}", e),
        },
        None => {
            let mut spawner = CustomerSpawner::new(SHOP_LEVEL);
            shop.run_random(&mut spawner, SESSION_TICKS);
        }
    }
}
