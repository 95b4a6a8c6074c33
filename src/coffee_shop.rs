//! Orquestador de la sesion. Une libro de stock, catalogo, maquina y clientes.
use std::collections::VecDeque;

use log::{info, warn};

use crate::composition::{DrinkComposition, DrinkType};
use crate::constants::{MAX_WAITING_CUSTOMERS, TICK_DURATION};
use crate::customer::{Customer, CustomerState, ServeOutcome};
use crate::errors::CoffeeShopError;
use crate::inventory::InventoryLedger;
use crate::machine::CoffeeMachine;
use crate::recipe::RecipeCatalog;
use crate::resolver::OrderResolver;
use crate::scenario_reader::ScriptedCustomer;
use crate::spawner::CustomerSpawner;
use crate::statistics::SessionStatistics;

/// Sesion de la cafeteria. Todas las dependencias entran por el constructor,
/// no hay singletons. Un solo hilo recorre el grafo de llamadas por tick.
pub struct CoffeeShop {
    ledger: InventoryLedger,
    catalog: RecipeCatalog,
    machine: CoffeeMachine,
    customers: Vec<Customer>,
    statistics: SessionStatistics,
}

impl CoffeeShop {
    pub fn new(ledger: InventoryLedger, catalog: RecipeCatalog) -> CoffeeShop {
        CoffeeShop {
            ledger,
            catalog,
            machine: CoffeeMachine::new(),
            customers: Vec::new(),
            statistics: SessionStatistics::new(),
        }
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    pub fn waiting_customers(&self) -> usize {
        self.customers.len()
    }

    /// Corre la sesion con clientes aleatorios del spawner.
    pub fn run_random(&mut self, spawner: &mut CustomerSpawner, ticks: u64) {
        let mut next_arrival = spawner.next_arrival_gap();
        for _ in 0..ticks {
            if next_arrival == 0 {
                if self.customers.len() < MAX_WAITING_CUSTOMERS {
                    self.admit(spawner.spawn());
                } else {
                    info!("[SHOP] The shop is full, a customer walked past");
                }
                next_arrival = spawner.next_arrival_gap();
            } else {
                next_arrival -= 1;
            }
            self.step();
        }
        self.statistics.print_summary(&self.ledger);
    }

    /// Corre la sesion con los clientes guionados de un escenario.
    /// Termina antes si ya no queda nadie por llegar ni por atender.
    pub fn run_scripted(&mut self, scripted: Vec<ScriptedCustomer>, ticks: u64) {
        let mut pending: VecDeque<ScriptedCustomer> = scripted.into();
        let mut next_id = 0;
        for tick in 0..ticks {
            while pending
                .front()
                .map_or(false, |customer| customer.arrival_tick <= tick)
            {
                if let Some(scripted_customer) = pending.pop_front() {
                    self.admit(Customer::new(
                        next_id,
                        scripted_customer.class,
                        scripted_customer.requests,
                    ));
                    next_id += 1;
                }
            }
            self.step();
            if pending.is_empty() && self.customers.is_empty() {
                break;
            }
        }
        self.statistics.print_summary(&self.ledger);
    }

    fn admit(&mut self, customer: Customer) {
        info!(
            "[SHOP] Customer {} ({:?}) came in asking for {:?}",
            customer.id(),
            customer.class(),
            customer.order().requests()
        );
        self.customers.push(customer);
    }

    /// Un tick de la sesion: atender, descontar paciencia, despedir.
    fn step(&mut self) {
        self.serve_next();
        for customer in &mut self.customers {
            customer.tick(TICK_DURATION);
        }
        let statistics = &mut self.statistics;
        self.customers.retain(|customer| match customer.state() {
            CustomerState::Waiting => true,
            CustomerState::Served => false,
            CustomerState::Left => {
                statistics.customers_lost += 1;
                false
            }
        });
    }

    /// El barista prepara el primer pedido pendiente del cliente mas antiguo
    /// y se lo entrega.
    fn serve_next(&mut self) {
        let target = self
            .customers
            .iter()
            .position(|customer| customer.state() == CustomerState::Waiting);
        let index = match target {
            Some(index) => index,
            None => return,
        };
        let requested = match self.customers[index].order().next_pending() {
            Some(requested) => requested,
            None => return,
        };

        let composition = match self.prepare_drink(requested) {
            Ok(composition) => composition,
            Err(CoffeeShopError::InsufficientStock(ingredient)) => {
                warn!(
                    "[SHOP] Skipped a {:?}, not enough {:?}",
                    requested, ingredient
                );
                return;
            }
            Err(error) => {
                warn!("[SHOP] Could not prepare a {:?}: {:?}", requested, error);
                return;
            }
        };

        let resolver = OrderResolver::new(&self.catalog);
        match self.customers[index].try_serve(&composition, &resolver) {
            Ok(ServeOutcome::Completed { reward }) => {
                self.statistics.drinks_served += 1;
                self.statistics.customers_served += 1;
                self.statistics.money_earned += reward;
            }
            Ok(ServeOutcome::Accepted { .. }) => {
                self.statistics.drinks_served += 1;
            }
            Err(CoffeeShopError::RecipeMismatch) => {
                self.statistics.mismatches += 1;
            }
            Err(error) => {
                warn!("[SHOP] Serve failed: {:?}", error);
            }
        }
    }

    /// Arma la bebida pedida de punta a punta. Si falta stock a mitad de
    /// camino el vaso se descarta, los ingredientes ya usados no vuelven.
    fn prepare_drink(&mut self, requested: DrinkType) -> Result<DrinkComposition, CoffeeShopError> {
        self.machine.place_cup(&mut self.ledger, &self.catalog)?;
        if let Err(error) = self.fill_cup(requested) {
            self.machine.discard_drink();
            return Err(error);
        }
        self.machine.take_drink()
    }

    fn fill_cup(&mut self, requested: DrinkType) -> Result<(), CoffeeShopError> {
        if self.catalog.requires_coffee(requested) {
            self.machine.grind(&mut self.ledger, &self.catalog)?;
            self.machine.brew()?;
        }
        for topping in self.catalog.required_toppings(requested) {
            self.machine
                .add_topping(*topping, &mut self.ledger, &self.catalog)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::Ingredient;
    use crate::order::CustomerClass;

    fn scripted(class: CustomerClass, requests: Vec<DrinkType>) -> ScriptedCustomer {
        ScriptedCustomer {
            class,
            requests,
            arrival_tick: 0,
        }
    }

    #[test]
    fn a_single_hot_coffee_customer_gets_served_and_pays() {
        let mut shop = CoffeeShop::new(InventoryLedger::with_default_stock(), RecipeCatalog::new());
        shop.run_scripted(
            vec![scripted(CustomerClass::Normal, vec![DrinkType::HotCoffee])],
            10,
        );

        assert_eq!(1, shop.statistics().customers_served);
        assert_eq!(10, shop.statistics().money_earned);
        assert_eq!(90, shop.ledger().query(Ingredient::CoffeeBeans));
        assert_eq!(9, shop.ledger().query(Ingredient::Cup));
        assert_eq!(0, shop.waiting_customers());
    }

    #[test]
    fn a_two_drink_order_is_fulfilled_across_ticks() {
        let mut shop = CoffeeShop::new(InventoryLedger::with_default_stock(), RecipeCatalog::new());
        shop.run_scripted(
            vec![scripted(
                CustomerClass::Normal,
                vec![DrinkType::IcedCoffee, DrinkType::Latte],
            )],
            10,
        );

        assert_eq!(2, shop.statistics().drinks_served);
        assert_eq!(1, shop.statistics().customers_served);
        assert_eq!(30, shop.statistics().money_earned);
    }

    #[test]
    fn vip_customers_pay_the_multiplied_price() {
        let mut shop = CoffeeShop::new(InventoryLedger::with_default_stock(), RecipeCatalog::new());
        shop.run_scripted(
            vec![scripted(CustomerClass::Vip, vec![DrinkType::HotCoffee])],
            10,
        );

        assert_eq!(15, shop.statistics().money_earned);
    }

    #[test]
    fn a_customer_is_lost_when_the_stock_cannot_cover_the_order() {
        let mut ledger = InventoryLedger::new();
        ledger.add_stock(Ingredient::Cup, 50, 50);
        ledger.add_stock(Ingredient::CoffeeBeans, 0, 200);
        let mut shop = CoffeeShop::new(ledger, RecipeCatalog::new());
        shop.run_scripted(
            vec![scripted(CustomerClass::Normal, vec![DrinkType::HotCoffee])],
            60,
        );

        assert_eq!(0, shop.statistics().customers_served);
        assert_eq!(1, shop.statistics().customers_lost);
    }

    #[test]
    fn fig_tea_is_prepared_without_coffee() {
        let mut shop = CoffeeShop::new(InventoryLedger::with_default_stock(), RecipeCatalog::new());
        shop.run_scripted(
            vec![scripted(CustomerClass::Normal, vec![DrinkType::FigTeaOnly])],
            10,
        );

        assert_eq!(1, shop.statistics().customers_served);
        assert_eq!(5, shop.statistics().money_earned);
        assert_eq!(100, shop.ledger().query(Ingredient::CoffeeBeans));
        assert_eq!(14, shop.ledger().query(Ingredient::Fig));
    }

    #[test]
    fn customers_arrive_at_their_scripted_tick() {
        let mut shop = CoffeeShop::new(InventoryLedger::with_default_stock(), RecipeCatalog::new());
        let late = ScriptedCustomer {
            class: CustomerClass::Normal,
            requests: vec![DrinkType::HotCoffee],
            arrival_tick: 3,
        };
        shop.run_scripted(vec![late], 10);
        assert_eq!(1, shop.statistics().customers_served);
    }
}
