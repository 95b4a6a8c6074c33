//! Libro de stock de la cafeteria. Unico escritor, sin locks.
use std::collections::HashMap;

use log::{debug, warn};

use crate::constants::{
    CARAMBOLA_CAPACITY, CARAMBOLA_STORAGE, COFFEE_BEANS_CAPACITY, COFFEE_BEANS_STORAGE,
    CUP_CAPACITY, CUP_STORAGE, FIG_CAPACITY, FIG_STORAGE, ICE_CAPACITY, ICE_STORAGE,
    MILK_CAPACITY, MILK_STORAGE, STRAWBERRY_CAPACITY, STRAWBERRY_STORAGE,
};
use crate::ingredient::Ingredient;

/// Observador de cambios de stock, recibe `(ingrediente, cantidad nueva)`.
/// Pensado para indicadores visuales, el libro no sabe quien escucha.
pub type StockObserver = Box<dyn FnMut(Ingredient, u64)>;

/// Stock de un ingrediente con su capacidad y el total consumido en la sesion.
pub struct IngredientStock {
    pub ingredient: Ingredient,
    pub display_name: &'static str,
    pub unit: &'static str,
    pub current: u64,
    pub max: u64,
    pub consumed: u64,
}

impl IngredientStock {
    pub fn new(ingredient: Ingredient, initial: u64, max: u64) -> IngredientStock {
        IngredientStock {
            ingredient,
            display_name: ingredient.display_name(),
            unit: ingredient.unit(),
            current: initial.min(max),
            max,
            consumed: 0,
        }
    }
}

/// Libro de stock. Registra consumos y reposiciones y avisa a los observadores
/// despues de cada mutacion exitosa.
pub struct InventoryLedger {
    stocks: HashMap<Ingredient, IngredientStock>,
    observers: Vec<StockObserver>,
}

impl InventoryLedger {
    pub fn new() -> InventoryLedger {
        InventoryLedger {
            stocks: HashMap::new(),
            observers: Vec::new(),
        }
    }

    /// Libro con el stock inicial de una sesion nueva.
    pub fn with_default_stock() -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        ledger.add_stock(Ingredient::CoffeeBeans, COFFEE_BEANS_STORAGE, COFFEE_BEANS_CAPACITY);
        ledger.add_stock(Ingredient::Milk, MILK_STORAGE, MILK_CAPACITY);
        ledger.add_stock(Ingredient::Strawberry, STRAWBERRY_STORAGE, STRAWBERRY_CAPACITY);
        ledger.add_stock(Ingredient::Carambola, CARAMBOLA_STORAGE, CARAMBOLA_CAPACITY);
        ledger.add_stock(Ingredient::Fig, FIG_STORAGE, FIG_CAPACITY);
        ledger.add_stock(Ingredient::Ice, ICE_STORAGE, ICE_CAPACITY);
        ledger.add_stock(Ingredient::Cup, CUP_STORAGE, CUP_CAPACITY);
        ledger
    }

    pub fn add_stock(&mut self, ingredient: Ingredient, initial: u64, max: u64) {
        self.stocks
            .insert(ingredient, IngredientStock::new(ingredient, initial, max));
    }

    /// Registra un observador que sera notificado en cada mutacion exitosa.
    pub fn subscribe(&mut self, observer: StockObserver) {
        self.observers.push(observer);
    }

    /// Descuenta `amount` del ingrediente. Si no alcanza el stock devuelve
    /// `false` y no muta nada.
    pub fn consume(&mut self, ingredient: Ingredient, amount: u64) -> bool {
        let new_amount = match self.stocks.get_mut(&ingredient) {
            Some(stock) => {
                if stock.current < amount {
                    warn!(
                        "[LEDGER] Not enough {}, requested {} but only {} {} left",
                        stock.display_name, amount, stock.current, stock.unit
                    );
                    return false;
                }
                stock.current -= amount;
                stock.consumed += amount;
                debug!(
                    "[LEDGER] Used {} {} of {}, {} left",
                    amount, stock.unit, stock.display_name, stock.current
                );
                stock.current
            }
            None => {
                warn!("[LEDGER] Unknown ingredient {:?}", ingredient);
                return false;
            }
        };
        self.notify(ingredient, new_amount);
        true
    }

    /// Repone `amount` del ingrediente, recortado a la capacidad maxima.
    pub fn replenish(&mut self, ingredient: Ingredient, amount: u64) {
        let new_amount = match self.stocks.get_mut(&ingredient) {
            Some(stock) => {
                stock.current = (stock.current + amount).min(stock.max);
                debug!(
                    "[LEDGER] Replenished {} up to {} {}",
                    stock.display_name, stock.current, stock.unit
                );
                stock.current
            }
            None => {
                warn!("[LEDGER] Unknown ingredient {:?}", ingredient);
                return;
            }
        };
        self.notify(ingredient, new_amount);
    }

    pub fn query(&self, ingredient: Ingredient) -> u64 {
        self.stocks.get(&ingredient).map_or(0, |stock| stock.current)
    }

    pub fn stock(&self, ingredient: Ingredient) -> Option<&IngredientStock> {
        self.stocks.get(&ingredient)
    }

    fn notify(&mut self, ingredient: Ingredient, new_amount: u64) {
        for observer in &mut self.observers {
            observer(ingredient, new_amount);
        }
    }
}
