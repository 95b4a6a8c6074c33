//! Resolucion de pedidos contra la bebida servida
use log::debug;

use crate::composition::{Classification, DrinkComposition, DrinkType};
use crate::order::CustomerOrder;
use crate::recipe::RecipeCatalog;

/// Compara bebidas servidas contra pedidos y calcula recompensas.
/// Recibe el catalogo por inyeccion, no hay estado global.
pub struct OrderResolver<'a> {
    catalog: &'a RecipeCatalog,
}

impl<'a> OrderResolver<'a> {
    pub fn new(catalog: &'a RecipeCatalog) -> OrderResolver<'a> {
        OrderResolver { catalog }
    }

    /// Busca el primer pedido pendiente que coincide con la clasificacion de
    /// la bebida y lo marca entregado. Una bebida fallida nunca coincide.
    pub fn try_fulfill_one(
        &self,
        order: &mut CustomerOrder,
        composition: &DrinkComposition,
    ) -> Option<DrinkType> {
        let drink_type = match composition.classify() {
            Classification::Drink(drink_type) => drink_type,
            Classification::FailedDrink => {
                debug!("[RESOLVER] Served a failed drink, no order can match");
                return None;
            }
        };
        if !self.catalog.validate(composition, drink_type) {
            return None;
        }
        if order.fulfill(drink_type) {
            return Some(drink_type);
        }
        None
    }

    pub fn is_order_complete(&self, order: &CustomerOrder) -> bool {
        order.is_complete()
    }

    /// Recompensa total del pedido: precio base por el multiplicador de la
    /// clase del cliente, redondeado por bebida.
    pub fn compute_reward(&self, order: &CustomerOrder) -> u64 {
        order
            .requests()
            .iter()
            .map(|drink_type| {
                let base_price = self.catalog.price_of(*drink_type);
                (base_price as f32 * order.reward_multiplier()).round() as u64
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::Topping;

    fn drink(coffee: bool, toppings: &[Topping]) -> DrinkComposition {
        let mut composition = DrinkComposition::new();
        if coffee {
            composition.set_coffee_brewed();
        }
        for topping in toppings {
            composition.add_topping(*topping);
        }
        composition
    }

    #[test]
    fn should_fulfill_the_matching_request_and_leave_the_rest_pending() {
        let catalog = RecipeCatalog::new();
        let resolver = OrderResolver::new(&catalog);
        let mut order = CustomerOrder::new(vec![DrinkType::IcedCoffee, DrinkType::Latte], 1.0);

        let served = resolver.try_fulfill_one(&mut order, &drink(true, &[Topping::Ice]));
        assert_eq!(Some(DrinkType::IcedCoffee), served);
        assert_eq!(1, order.remaining());
        assert_eq!(false, resolver.is_order_complete(&order));

        let served = resolver.try_fulfill_one(&mut order, &drink(true, &[Topping::Milk]));
        assert_eq!(Some(DrinkType::Latte), served);
        assert_eq!(true, resolver.is_order_complete(&order));
        assert_eq!(30, resolver.compute_reward(&order));
    }

    #[test]
    fn should_not_fulfill_anything_with_a_mismatched_drink() {
        let catalog = RecipeCatalog::new();
        let resolver = OrderResolver::new(&catalog);
        let mut order = CustomerOrder::new(vec![DrinkType::StrawberryLatte], 1.0);

        let served = resolver.try_fulfill_one(&mut order, &drink(true, &[]));
        assert_eq!(None, served);
        assert_eq!(0, order.completed_count());
    }

    #[test]
    fn should_never_match_a_failed_drink() {
        let catalog = RecipeCatalog::new();
        let resolver = OrderResolver::new(&catalog);
        let mut order = CustomerOrder::new(vec![DrinkType::HotCoffee], 1.0);

        let served =
            resolver.try_fulfill_one(&mut order, &drink(true, &[Topping::Milk, Topping::Ice]));
        assert_eq!(None, served);
    }

    #[test]
    fn should_apply_the_vip_multiplier_per_drink_with_rounding() {
        let catalog = RecipeCatalog::new();
        let resolver = OrderResolver::new(&catalog);
        let order = CustomerOrder::new(vec![DrinkType::HotCoffee, DrinkType::FigTeaOnly], 1.5);
        // 10 * 1.5 = 15 y 5 * 1.5 = 7.5 que redondea a 8
        assert_eq!(23, resolver.compute_reward(&order));
    }
}
