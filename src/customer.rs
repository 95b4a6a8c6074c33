//! Cliente en espera con su pedido y su paciencia
use log::{info, warn};

use crate::composition::{DrinkComposition, DrinkType};
use crate::constants::{BASE_PATIENCE, FIG_TEA_PATIENCE_RESTORE, MISMATCH_PATIENCE_PENALTY};
use crate::errors::CoffeeShopError;
use crate::order::{CustomerClass, CustomerOrder};
use crate::resolver::OrderResolver;

/// Estados del cliente. `Served` y `Left` son terminales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerState {
    Waiting,
    Served,
    Left,
}

/// Resultado de una entrega aceptada.
#[derive(Debug, PartialEq, Eq)]
pub enum ServeOutcome {
    /// Se entrego una bebida pero quedan pedidos pendientes
    Accepted { remaining: usize },
    /// Se completo todo el pedido, con la recompensa a pagar
    Completed { reward: u64 },
}

/// Cliente esperando su pedido. La paciencia es una cuenta regresiva que
/// descuenta el que llama en cada tick, nada se bloquea.
pub struct Customer {
    id: usize,
    class: CustomerClass,
    order: CustomerOrder,
    patience_max: f32,
    patience_left: f32,
    state: CustomerState,
}

impl Customer {
    pub fn new(id: usize, class: CustomerClass, requests: Vec<DrinkType>) -> Customer {
        let patience_max = BASE_PATIENCE * class.patience_factor();
        Customer {
            id,
            class,
            order: CustomerOrder::new(requests, class.reward_multiplier()),
            patience_max,
            patience_left: patience_max,
            state: CustomerState::Waiting,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn class(&self) -> CustomerClass {
        self.class
    }

    pub fn state(&self) -> CustomerState {
        self.state
    }

    pub fn order(&self) -> &CustomerOrder {
        &self.order
    }

    pub fn patience_left(&self) -> f32 {
        self.patience_left
    }

    /// Descuenta la paciencia. Si se agota, el cliente se va enojado
    /// y abandona el pedido.
    pub fn tick(&mut self, delta: f32) {
        if self.state != CustomerState::Waiting {
            return;
        }
        self.patience_left -= delta;
        if self.patience_left <= 0.0 {
            self.patience_left = 0.0;
            self.state = CustomerState::Left;
            warn!(
                "[CUSTOMER {}] Ran out of patience and left angry with {} drinks pending",
                self.id,
                self.order.remaining()
            );
        }
    }

    /// Intenta entregar la bebida. Si coincide con un pedido pendiente lo
    /// marca entregado; si no, castiga la paciencia y devuelve el error.
    pub fn try_serve(
        &mut self,
        composition: &DrinkComposition,
        resolver: &OrderResolver,
    ) -> Result<ServeOutcome, CoffeeShopError> {
        if self.state != CustomerState::Waiting {
            return Err(CoffeeShopError::InvalidPlacement);
        }
        if !composition.is_servable() {
            warn!("[CUSTOMER {}] Was handed an empty cup", self.id);
            return Err(CoffeeShopError::InvalidPlacement);
        }

        match resolver.try_fulfill_one(&mut self.order, composition) {
            Some(drink_type) => {
                if drink_type == DrinkType::FigTeaOnly {
                    self.restore_patience(self.patience_max * FIG_TEA_PATIENCE_RESTORE);
                }
                if self.order.is_complete() {
                    let reward = resolver.compute_reward(&self.order);
                    self.state = CustomerState::Served;
                    info!(
                        "[CUSTOMER {}] Got the whole order, pays {} coins",
                        self.id, reward
                    );
                    Ok(ServeOutcome::Completed { reward })
                } else {
                    info!(
                        "[CUSTOMER {}] Got a {:?}, {} drinks to go",
                        self.id,
                        drink_type,
                        self.order.remaining()
                    );
                    Ok(ServeOutcome::Accepted {
                        remaining: self.order.remaining(),
                    })
                }
            }
            None => {
                self.patience_left -= MISMATCH_PATIENCE_PENALTY;
                warn!(
                    "[CUSTOMER {}] Got the wrong drink, patience down to {:.1}",
                    self.id, self.patience_left
                );
                if self.patience_left <= 0.0 {
                    self.patience_left = 0.0;
                    self.state = CustomerState::Left;
                    warn!("[CUSTOMER {}] Left angry after a wrong drink", self.id);
                }
                Err(CoffeeShopError::RecipeMismatch)
            }
        }
    }

    /// El te de higos calma al cliente, recupera paciencia hasta el maximo.
    fn restore_patience(&mut self, amount: f32) {
        self.patience_left = (self.patience_left + amount).min(self.patience_max);
        info!(
            "[CUSTOMER {}] Fig tea restored patience up to {:.1}",
            self.id, self.patience_left
        );
    }
}
