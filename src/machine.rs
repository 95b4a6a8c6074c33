//! Maquina de cafe. Muele, extrae y arma la bebida del vaso en preparacion.
use log::{debug, info, warn};

use crate::composition::DrinkComposition;
use crate::errors::CoffeeShopError;
use crate::ingredient::{Ingredient, Topping};
use crate::inventory::InventoryLedger;
use crate::recipe::RecipeCatalog;

/// Maquina con un solo vaso en preparacion a la vez. Los ingredientes se
/// descuentan del libro de stock en el momento de usarse, no hay reservas
/// que deshacer si algo falla.
pub struct CoffeeMachine {
    current: Option<DrinkComposition>,
    has_ground_coffee: bool,
}

impl CoffeeMachine {
    pub fn new() -> CoffeeMachine {
        CoffeeMachine {
            current: None,
            has_ground_coffee: false,
        }
    }

    pub fn has_cup(&self) -> bool {
        self.current.is_some()
    }

    /// Pone un vaso nuevo, consumiendo uno del stock.
    pub fn place_cup(
        &mut self,
        ledger: &mut InventoryLedger,
        catalog: &RecipeCatalog,
    ) -> Result<(), CoffeeShopError> {
        if self.current.is_some() {
            warn!("[MACHINE] There is already a cup in the machine");
            return Err(CoffeeShopError::InvalidPlacement);
        }
        let cups = catalog.consumption_of(Ingredient::Cup);
        if !ledger.consume(Ingredient::Cup, cups) {
            return Err(CoffeeShopError::InsufficientStock(Ingredient::Cup));
        }
        self.current = Some(DrinkComposition::new());
        debug!("[MACHINE] Placed a new cup");
        Ok(())
    }

    /// Muele granos para una extraccion. Si ya hay cafe molido no vuelve
    /// a consumir.
    pub fn grind(
        &mut self,
        ledger: &mut InventoryLedger,
        catalog: &RecipeCatalog,
    ) -> Result<(), CoffeeShopError> {
        if self.has_ground_coffee {
            warn!("[MACHINE] There is already ground coffee waiting to brew");
            return Ok(());
        }
        let beans = catalog.consumption_of(Ingredient::CoffeeBeans);
        if !ledger.consume(Ingredient::CoffeeBeans, beans) {
            return Err(CoffeeShopError::InsufficientStock(Ingredient::CoffeeBeans));
        }
        self.has_ground_coffee = true;
        info!("[MACHINE] Ground {} g of coffee beans", beans);
        Ok(())
    }

    /// Extrae el cafe molido dentro del vaso.
    pub fn brew(&mut self) -> Result<(), CoffeeShopError> {
        let composition = match self.current.as_mut() {
            Some(composition) => composition,
            None => {
                warn!("[MACHINE] Cannot brew without a cup");
                return Err(CoffeeShopError::InvalidPlacement);
            }
        };
        if !self.has_ground_coffee {
            warn!("[MACHINE] Cannot brew without ground coffee");
            return Err(CoffeeShopError::InvalidPlacement);
        }
        if !composition.set_coffee_brewed() {
            return Ok(());
        }
        self.has_ground_coffee = false;
        info!("[MACHINE] Brewed coffee into the cup");
        Ok(())
    }

    /// Agrega un ingrediente al vaso, consumiendo stock en el momento.
    /// Repetir un agregado no consume de nuevo.
    pub fn add_topping(
        &mut self,
        topping: Topping,
        ledger: &mut InventoryLedger,
        catalog: &RecipeCatalog,
    ) -> Result<(), CoffeeShopError> {
        let composition = match self.current.as_mut() {
            Some(composition) => composition,
            None => {
                warn!("[MACHINE] Cannot add {:?} without a cup", topping);
                return Err(CoffeeShopError::InvalidPlacement);
            }
        };
        if composition.has_topping(topping) {
            warn!("[MACHINE] {:?} was already added, ignoring", topping);
            return Err(CoffeeShopError::DuplicateIngredient(topping.ingredient()));
        }
        let amount = catalog.consumption_of(topping.ingredient());
        if !ledger.consume(topping.ingredient(), amount) {
            return Err(CoffeeShopError::InsufficientStock(topping.ingredient()));
        }
        composition.add_topping(topping);
        info!("[MACHINE] Added {:?} to the cup", topping);
        Ok(())
    }

    /// Saca la bebida terminada de la maquina. Un vaso sin cafe ni higos
    /// no se puede servir.
    pub fn take_drink(&mut self) -> Result<DrinkComposition, CoffeeShopError> {
        let servable = match &self.current {
            Some(composition) => composition.is_servable(),
            None => {
                warn!("[MACHINE] There is no cup to take");
                return Err(CoffeeShopError::InvalidPlacement);
            }
        };
        if !servable {
            warn!("[MACHINE] The cup is not servable yet");
            return Err(CoffeeShopError::InvalidPlacement);
        }
        let composition = self
            .current
            .take()
            .ok_or(CoffeeShopError::InvalidPlacement)?;
        debug!(
            "[MACHINE] Drink taken out, classified as {:?}",
            composition.classify()
        );
        Ok(composition)
    }

    /// Tira el vaso actual. El vaso ya consumido no se recupera.
    pub fn discard_drink(&mut self) {
        if self.current.take().is_some() {
            info!("[MACHINE] Discarded the current cup");
        }
    }
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        CoffeeMachine::new()
    }
}
