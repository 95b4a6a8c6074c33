//! Generacion aleatoria de clientes segun el nivel del local
use log::debug;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::composition::DrinkType;
use crate::constants::{MAX_SPAWN_GAP, MIN_SPAWN_GAP};
use crate::customer::Customer;
use crate::order::CustomerClass;

/// Genera clientes con clase y pedido aleatorios. La mezcla de clases y el
/// tamano del pedido crecen con el nivel del local.
pub struct CustomerSpawner {
    level: u32,
    next_id: usize,
    rng: ThreadRng,
}

impl CustomerSpawner {
    pub fn new(level: u32) -> CustomerSpawner {
        CustomerSpawner {
            level,
            next_id: 0,
            rng: thread_rng(),
        }
    }

    pub fn spawn(&mut self) -> Customer {
        let (class, request_count) = self.pick_class_and_count();
        let requests = (0..request_count)
            .map(|_| self.random_drink())
            .collect::<Vec<DrinkType>>();
        let id = self.next_id;
        self.next_id += 1;
        debug!(
            "[SPAWNER] New {:?} customer {} asking for {:?}",
            class, id, requests
        );
        Customer::new(id, class, requests)
    }

    /// Ticks hasta la proxima llegada.
    pub fn next_arrival_gap(&mut self) -> u64 {
        self.rng.gen_range(MIN_SPAWN_GAP, MAX_SPAWN_GAP + 1)
    }

    fn pick_class_and_count(&mut self) -> (CustomerClass, usize) {
        match self.level {
            0 | 1 => (CustomerClass::Normal, 1),
            2 => {
                let class = if self.rng.gen::<f32>() < 0.5 {
                    CustomerClass::Normal
                } else {
                    CustomerClass::Vip
                };
                (class, self.rng.gen_range(1, 3))
            }
            _ => {
                let roll = self.rng.gen::<f32>();
                let class = if roll < 0.4 {
                    CustomerClass::Normal
                } else if roll < 0.7 {
                    CustomerClass::Vip
                } else {
                    CustomerClass::Impatient
                };
                (class, self.rng.gen_range(2, 4))
            }
        }
    }

    fn random_drink(&mut self) -> DrinkType {
        let roll = self.rng.gen::<f32>();
        if roll < 0.2 {
            DrinkType::HotCoffee
        } else if roll < 0.4 {
            DrinkType::IcedCoffee
        } else if roll < 0.6 {
            DrinkType::Latte
        } else if roll < 0.75 {
            DrinkType::StrawberryLatte
        } else if roll < 0.9 {
            DrinkType::CarambolaAmericano
        } else {
            DrinkType::FigTeaOnly
        }
    }
}
