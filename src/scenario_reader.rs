//! Lectura del archivo de escenario con los clientes guionados
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{error, info};
use serde::Deserialize;

use crate::composition::DrinkType;
use crate::errors::CoffeeShopError;
use crate::order::CustomerClass;

/// Cliente guionado del escenario, con su tick de llegada.
#[derive(Deserialize, Debug)]
pub struct ScriptedCustomer {
    pub class: CustomerClass,
    pub requests: Vec<DrinkType>,
    #[serde(default)]
    pub arrival_tick: u64,
}

#[derive(Deserialize)]
struct ScenarioConfiguration {
    customers: Vec<ScriptedCustomer>,
}

/// Lee el escenario desde un archivo JSON. Los clientes quedan ordenados
/// por tick de llegada.
pub fn read_scenario<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptedCustomer>, CoffeeShopError> {
    let file = File::open(path).map_err(|e| {
        error!("[READER] Could not open the scenario file: {}", e);
        CoffeeShopError::ScenarioFileError
    })?;
    let reader = BufReader::new(file);
    let configuration: ScenarioConfiguration = serde_json::from_reader(reader).map_err(|e| {
        error!("[READER] Could not parse the scenario file: {}", e);
        CoffeeShopError::ScenarioFileError
    })?;
    let mut customers = configuration.customers;
    customers.sort_by_key(|customer| customer.arrival_tick);
    info!("[READER] Loaded {} scripted customers", customers.len());
    Ok(customers)
}

/// Interpreta un escenario ya leido en memoria. Separado para poder
/// probarlo sin tocar el disco.
pub fn parse_scenario(raw: &str) -> Result<Vec<ScriptedCustomer>, CoffeeShopError> {
    let configuration: ScenarioConfiguration = serde_json::from_str(raw).map_err(|e| {
        error!("[READER] Could not parse the scenario: {}", e);
        CoffeeShopError::ScenarioFileError
    })?;
    let mut customers = configuration.customers;
    customers.sort_by_key(|customer| customer.arrival_tick);
    Ok(customers)
}
