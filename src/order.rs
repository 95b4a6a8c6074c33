//! Pedido de un cliente y clases de cliente
use serde::Deserialize;

use crate::composition::DrinkType;
use crate::constants::{IMPATIENT_PATIENCE_FACTOR, VIP_REWARD_MULTIPLIER};

/// Clase del cliente, modifica la recompensa y la paciencia base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerClass {
    Normal,
    Vip,
    Impatient,
}

impl CustomerClass {
    pub fn reward_multiplier(&self) -> f32 {
        match self {
            CustomerClass::Vip => VIP_REWARD_MULTIPLIER,
            CustomerClass::Normal | CustomerClass::Impatient => 1.0,
        }
    }

    pub fn patience_factor(&self) -> f32 {
        match self {
            CustomerClass::Impatient => IMPATIENT_PATIENCE_FACTOR,
            CustomerClass::Normal | CustomerClass::Vip => 1.0,
        }
    }
}

/// Lista de bebidas pedidas por un cliente, con el avance de entrega.
#[derive(Debug)]
pub struct CustomerOrder {
    requests: Vec<DrinkType>,
    completed: Vec<bool>,
    completed_count: usize,
    reward_multiplier: f32,
}

impl CustomerOrder {
    pub fn new(requests: Vec<DrinkType>, reward_multiplier: f32) -> CustomerOrder {
        let completed = vec![false; requests.len()];
        CustomerOrder {
            requests,
            completed,
            completed_count: 0,
            reward_multiplier,
        }
    }

    pub fn requests(&self) -> &[DrinkType] {
        &self.requests
    }

    pub fn reward_multiplier(&self) -> f32 {
        self.reward_multiplier
    }

    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    pub fn remaining(&self) -> usize {
        self.requests.len() - self.completed_count
    }

    pub fn is_complete(&self) -> bool {
        self.completed_count == self.requests.len()
    }

    /// Primer pedido todavia no entregado, el que el barista prepara ahora.
    pub fn next_pending(&self) -> Option<DrinkType> {
        self.requests
            .iter()
            .zip(self.completed.iter())
            .find(|(_, done)| !**done)
            .map(|(drink, _)| *drink)
    }

    /// Marca como entregado el primer pedido pendiente de ese tipo.
    /// Devuelve `false` si no habia ninguno pendiente de ese tipo.
    pub fn fulfill(&mut self, drink_type: DrinkType) -> bool {
        for (request, done) in self.requests.iter().zip(self.completed.iter_mut()) {
            if !*done && *request == drink_type {
                *done = true;
                self.completed_count += 1;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_no_completed_requests() {
        let order = CustomerOrder::new(vec![DrinkType::IcedCoffee, DrinkType::Latte], 1.0);
        assert_eq!(0, order.completed_count());
        assert_eq!(2, order.remaining());
        assert_eq!(false, order.is_complete());
        assert_eq!(Some(DrinkType::IcedCoffee), order.next_pending());
    }

    #[test]
    fn should_fulfill_requests_in_any_order() {
        let mut order = CustomerOrder::new(vec![DrinkType::IcedCoffee, DrinkType::Latte], 1.0);
        assert_eq!(true, order.fulfill(DrinkType::Latte));
        assert_eq!(1, order.remaining());
        assert_eq!(Some(DrinkType::IcedCoffee), order.next_pending());
        assert_eq!(true, order.fulfill(DrinkType::IcedCoffee));
        assert_eq!(true, order.is_complete());
    }

    #[test]
    fn should_not_fulfill_a_drink_that_was_not_requested() {
        let mut order = CustomerOrder::new(vec![DrinkType::HotCoffee], 1.0);
        assert_eq!(false, order.fulfill(DrinkType::Latte));
        assert_eq!(0, order.completed_count());
    }

    #[test]
    fn should_not_fulfill_the_same_request_twice() {
        let mut order = CustomerOrder::new(vec![DrinkType::Latte], 1.0);
        assert_eq!(true, order.fulfill(DrinkType::Latte));
        assert_eq!(false, order.fulfill(DrinkType::Latte));
        assert_eq!(1, order.completed_count());
    }

    #[test]
    fn an_empty_order_is_already_complete() {
        let order = CustomerOrder::new(Vec::new(), 1.0);
        assert_eq!(true, order.is_complete());
        assert_eq!(None, order.next_pending());
    }

    #[test]
    fn vip_class_raises_the_reward_and_impatient_cuts_the_patience() {
        assert_eq!(1.5, CustomerClass::Vip.reward_multiplier());
        assert_eq!(1.0, CustomerClass::Normal.reward_multiplier());
        assert_eq!(1.0, CustomerClass::Impatient.reward_multiplier());
        assert_eq!(0.6, CustomerClass::Impatient.patience_factor());
        assert_eq!(1.0, CustomerClass::Vip.patience_factor());
    }
}
