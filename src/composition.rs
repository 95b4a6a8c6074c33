//! Estado del vaso en preparacion y clasificacion de la bebida
use log::warn;
use serde::Deserialize;

use crate::ingredient::Topping;

/// Tipos de bebida que vende la cafeteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkType {
    HotCoffee,
    IcedCoffee,
    Latte,
    StrawberryLatte,
    CarambolaAmericano,
    FigTeaOnly,
}

impl DrinkType {
    pub const ALL: [DrinkType; 6] = [
        DrinkType::HotCoffee,
        DrinkType::IcedCoffee,
        DrinkType::Latte,
        DrinkType::StrawberryLatte,
        DrinkType::CarambolaAmericano,
        DrinkType::FigTeaOnly,
    ];
}

/// Resultado de clasificar un vaso. Una mezcla de agregados que no coincide
/// con ninguna receta es una bebida fallida, no cae en cafe solo por defecto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Drink(DrinkType),
    FailedDrink,
}

/// Banderas de ingredientes del vaso en preparacion.
/// El tipo de bebida nunca se guarda, se recalcula con `classify`.
#[derive(Debug, Default, Clone)]
pub struct DrinkComposition {
    coffee_brewed: bool,
    ice: bool,
    milk: bool,
    strawberry: bool,
    carambola: bool,
    fig: bool,
}

impl DrinkComposition {
    pub fn new() -> DrinkComposition {
        DrinkComposition::default()
    }

    /// Marca el cafe como extraido. Devuelve `false` si ya lo estaba.
    pub fn set_coffee_brewed(&mut self) -> bool {
        if self.coffee_brewed {
            warn!("[CUP] Coffee was already brewed into this cup");
            return false;
        }
        self.coffee_brewed = true;
        true
    }

    pub fn coffee_brewed(&self) -> bool {
        self.coffee_brewed
    }

    /// Prende la bandera del agregado. Es idempotente, si ya estaba prendida
    /// devuelve `false` y no cambia nada.
    pub fn add_topping(&mut self, topping: Topping) -> bool {
        let flag = self.topping_flag_mut(topping);
        if *flag {
            warn!("[CUP] {:?} was already added to this cup", topping);
            return false;
        }
        *flag = true;
        true
    }

    pub fn has_topping(&self, topping: Topping) -> bool {
        match topping {
            Topping::Milk => self.milk,
            Topping::Strawberry => self.strawberry,
            Topping::Carambola => self.carambola,
            Topping::Fig => self.fig,
            Topping::Ice => self.ice,
        }
    }

    fn topping_flag_mut(&mut self, topping: Topping) -> &mut bool {
        match topping {
            Topping::Milk => &mut self.milk,
            Topping::Strawberry => &mut self.strawberry,
            Topping::Carambola => &mut self.carambola,
            Topping::Fig => &mut self.fig,
            Topping::Ice => &mut self.ice,
        }
    }

    fn has_any_topping(&self) -> bool {
        self.ice || self.milk || self.strawberry || self.carambola || self.fig
    }

    /// Un vaso se puede servir cuando tiene cafe extraido o higos (el te de
    /// higos es la unica bebida sin cafe).
    pub fn is_servable(&self) -> bool {
        self.coffee_brewed || self.fig
    }

    /// Clasifica el vaso segun sus banderas. Funcion pura y total,
    /// se evalua de arriba hacia abajo y gana la primera regla.
    pub fn classify(&self) -> Classification {
        if self.fig && !self.coffee_brewed {
            return Classification::Drink(DrinkType::FigTeaOnly);
        }
        if !self.coffee_brewed {
            // Vaso incompleto, todavia no es una bebida servible
            return Classification::Drink(DrinkType::HotCoffee);
        }
        if self.strawberry && self.milk && !self.ice && !self.carambola {
            return Classification::Drink(DrinkType::StrawberryLatte);
        }
        if self.carambola && self.ice && !self.milk && !self.strawberry {
            return Classification::Drink(DrinkType::CarambolaAmericano);
        }
        if self.milk && !self.ice && !self.strawberry && !self.carambola {
            return Classification::Drink(DrinkType::Latte);
        }
        if self.ice && !self.milk && !self.strawberry && !self.carambola {
            return Classification::Drink(DrinkType::IcedCoffee);
        }
        if self.has_any_topping() {
            // Mezcla que no coincide con ninguna receta
            return Classification::FailedDrink;
        }
        Classification::Drink(DrinkType::HotCoffee)
    }

    /// Vuelve el vaso al estado vacio.
    pub fn reset(&mut self) {
        *self = DrinkComposition::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composition_with(coffee: bool, toppings: &[Topping]) -> DrinkComposition {
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
    fn plain_brewed_coffee_is_a_hot_coffee() {
        let composition = composition_with(true, &[]);
        assert_eq!(
            Classification::Drink(DrinkType::HotCoffee),
            composition.classify()
        );
    }

    #[test]
    fn coffee_with_ice_is_an_iced_coffee() {
        let composition = composition_with(true, &[Topping::Ice]);
        assert_eq!(
            Classification::Drink(DrinkType::IcedCoffee),
            composition.classify()
        );
    }

    #[test]
    fn coffee_with_milk_is_a_latte() {
        let composition = composition_with(true, &[Topping::Milk]);
        assert_eq!(
            Classification::Drink(DrinkType::Latte),
            composition.classify()
        );
    }

    #[test]
    fn coffee_with_milk_and_strawberry_is_a_strawberry_latte() {
        let composition = composition_with(true, &[Topping::Milk, Topping::Strawberry]);
        assert_eq!(
            Classification::Drink(DrinkType::StrawberryLatte),
            composition.classify()
        );
    }

    #[test]
    fn coffee_with_ice_and_carambola_is_a_carambola_americano() {
        let composition = composition_with(true, &[Topping::Ice, Topping::Carambola]);
        assert_eq!(
            Classification::Drink(DrinkType::CarambolaAmericano),
            composition.classify()
        );
    }

    #[test]
    fn fig_without_coffee_is_a_fig_tea() {
        let composition = composition_with(false, &[Topping::Fig]);
        assert_eq!(
            Classification::Drink(DrinkType::FigTeaOnly),
            composition.classify()
        );
        assert_eq!(true, composition.is_servable());
    }

    #[test]
    fn coffee_with_milk_and_ice_is_a_failed_drink() {
        let composition = composition_with(true, &[Topping::Milk, Topping::Ice]);
        assert_eq!(Classification::FailedDrink, composition.classify());
    }

    #[test]
    fn coffee_with_only_fig_is_a_failed_drink() {
        let composition = composition_with(true, &[Topping::Fig]);
        assert_eq!(Classification::FailedDrink, composition.classify());
    }

    #[test]
    fn an_empty_cup_is_not_servable() {
        let composition = DrinkComposition::new();
        assert_eq!(false, composition.is_servable());
        assert_eq!(
            Classification::Drink(DrinkType::HotCoffee),
            composition.classify()
        );
    }

    #[test]
    fn adding_the_same_topping_twice_is_a_no_op() {
        let mut composition = composition_with(true, &[]);
        assert_eq!(true, composition.add_topping(Topping::Milk));
        assert_eq!(false, composition.add_topping(Topping::Milk));
        assert_eq!(
            Classification::Drink(DrinkType::Latte),
            composition.classify()
        );
    }

    #[test]
    fn reset_goes_back_to_the_default_classification() {
        let mut composition = composition_with(true, &[Topping::Milk, Topping::Strawberry]);
        composition.reset();
        assert_eq!(false, composition.is_servable());
        assert_eq!(
            Classification::Drink(DrinkType::HotCoffee),
            composition.classify()
        );
    }

    #[test]
    fn classification_is_total_and_deterministic_for_every_flag_set() {
        for mask in 0..64u32 {
            let mut composition = DrinkComposition::new();
            if mask & 1 != 0 {
                composition.set_coffee_brewed();
            }
            for (bit, topping) in Topping::ALL.iter().enumerate() {
                if mask & (1 << (bit + 1)) != 0 {
                    composition.add_topping(*topping);
                }
            }
            assert_eq!(composition.classify(), composition.classify());
        }
    }
}
