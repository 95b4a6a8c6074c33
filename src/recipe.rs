//! Catalogo de recetas, precios y consumos por ingrediente
use crate::composition::{Classification, DrinkComposition, DrinkType};
use crate::constants::{
    CARAMBOLA_PER_SERVING, COFFEE_BEANS_PER_GRIND, CUPS_PER_SERVING, FIG_PER_SERVING,
    ICE_PER_SERVING, MILK_PER_SERVING, STRAWBERRY_PER_SERVING,
};
use crate::ingredient::{Ingredient, Topping};

/// Receta de una bebida. Inmutable despues de armar el catalogo.
pub struct RecipeDefinition {
    pub drink_type: DrinkType,
    pub requires_coffee: bool,
    pub required_toppings: &'static [Topping],
    pub forbidden_toppings: &'static [Topping],
    pub base_price: u64,
}

/// Catalogo cerrado con una receta por tipo de bebida.
pub struct RecipeCatalog {
    recipes: [RecipeDefinition; 6],
}

impl RecipeCatalog {
    pub fn new() -> RecipeCatalog {
        RecipeCatalog {
            recipes: [
                RecipeDefinition {
                    drink_type: DrinkType::HotCoffee,
                    requires_coffee: true,
                    required_toppings: &[],
                    forbidden_toppings: &[
                        Topping::Ice,
                        Topping::Milk,
                        Topping::Strawberry,
                        Topping::Carambola,
                        Topping::Fig,
                    ],
                    base_price: 10,
                },
                RecipeDefinition {
                    drink_type: DrinkType::IcedCoffee,
                    requires_coffee: true,
                    required_toppings: &[Topping::Ice],
                    forbidden_toppings: &[
                        Topping::Milk,
                        Topping::Strawberry,
                        Topping::Carambola,
                        Topping::Fig,
                    ],
                    base_price: 15,
                },
                RecipeDefinition {
                    drink_type: DrinkType::Latte,
                    requires_coffee: true,
                    required_toppings: &[Topping::Milk],
                    forbidden_toppings: &[
                        Topping::Ice,
                        Topping::Strawberry,
                        Topping::Carambola,
                        Topping::Fig,
                    ],
                    base_price: 15,
                },
                RecipeDefinition {
                    drink_type: DrinkType::StrawberryLatte,
                    requires_coffee: true,
                    required_toppings: &[Topping::Milk, Topping::Strawberry],
                    forbidden_toppings: &[Topping::Ice, Topping::Carambola, Topping::Fig],
                    base_price: 25,
                },
                RecipeDefinition {
                    drink_type: DrinkType::CarambolaAmericano,
                    requires_coffee: true,
                    required_toppings: &[Topping::Ice, Topping::Carambola],
                    forbidden_toppings: &[Topping::Milk, Topping::Strawberry, Topping::Fig],
                    base_price: 20,
                },
                RecipeDefinition {
                    drink_type: DrinkType::FigTeaOnly,
                    requires_coffee: false,
                    required_toppings: &[Topping::Fig],
                    forbidden_toppings: &[
                        Topping::Ice,
                        Topping::Milk,
                        Topping::Strawberry,
                        Topping::Carambola,
                    ],
                    base_price: 5,
                },
            ],
        }
    }

    pub fn definition_of(&self, drink_type: DrinkType) -> &RecipeDefinition {
        self.recipes
            .iter()
            .find(|recipe| recipe.drink_type == drink_type)
            .unwrap_or(&self.recipes[0])
    }

    /// Una bebida es valida para un pedido cuando clasifica exactamente como
    /// ese tipo y ademas no tiene ningun agregado prohibido por la receta.
    pub fn validate(&self, composition: &DrinkComposition, requested: DrinkType) -> bool {
        if composition.classify() != Classification::Drink(requested) {
            return false;
        }
        let recipe = self.definition_of(requested);
        !recipe
            .forbidden_toppings
            .iter()
            .any(|topping| composition.has_topping(*topping))
    }

    pub fn price_of(&self, drink_type: DrinkType) -> u64 {
        self.definition_of(drink_type).base_price
    }

    /// Agregados que el barista tiene que poner para llegar al tipo pedido.
    pub fn required_toppings(&self, drink_type: DrinkType) -> &'static [Topping] {
        self.definition_of(drink_type).required_toppings
    }

    pub fn requires_coffee(&self, drink_type: DrinkType) -> bool {
        self.definition_of(drink_type).requires_coffee
    }

    /// Cuanto stock descuenta cada uso de un ingrediente.
    pub fn consumption_of(&self, ingredient: Ingredient) -> u64 {
        match ingredient {
            Ingredient::CoffeeBeans => COFFEE_BEANS_PER_GRIND,
            Ingredient::Milk => MILK_PER_SERVING,
            Ingredient::Strawberry => STRAWBERRY_PER_SERVING,
            Ingredient::Carambola => CARAMBOLA_PER_SERVING,
            Ingredient::Fig => FIG_PER_SERVING,
            Ingredient::Ice => ICE_PER_SERVING,
            Ingredient::Cup => CUPS_PER_SERVING,
        }
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        RecipeCatalog::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> DrinkComposition {
        let mut composition = DrinkComposition::new();
        composition.set_coffee_brewed();
        composition.add_topping(Topping::Milk);
        composition
    }

    #[test]
    fn should_have_the_fixed_price_table() {
        let catalog = RecipeCatalog::new();
        assert_eq!(10, catalog.price_of(DrinkType::HotCoffee));
        assert_eq!(15, catalog.price_of(DrinkType::IcedCoffee));
        assert_eq!(15, catalog.price_of(DrinkType::Latte));
        assert_eq!(25, catalog.price_of(DrinkType::StrawberryLatte));
        assert_eq!(20, catalog.price_of(DrinkType::CarambolaAmericano));
        assert_eq!(5, catalog.price_of(DrinkType::FigTeaOnly));
    }

    #[test]
    fn should_have_the_fixed_consumption_table() {
        let catalog = RecipeCatalog::new();
        assert_eq!(10, catalog.consumption_of(Ingredient::CoffeeBeans));
        assert_eq!(5, catalog.consumption_of(Ingredient::Milk));
        assert_eq!(3, catalog.consumption_of(Ingredient::Strawberry));
        assert_eq!(1, catalog.consumption_of(Ingredient::Carambola));
        assert_eq!(1, catalog.consumption_of(Ingredient::Fig));
        assert_eq!(3, catalog.consumption_of(Ingredient::Ice));
        assert_eq!(1, catalog.consumption_of(Ingredient::Cup));
    }

    #[test]
    fn should_validate_a_drink_that_matches_the_requested_type() {
        let catalog = RecipeCatalog::new();
        assert_eq!(true, catalog.validate(&latte(), DrinkType::Latte));
        assert_eq!(false, catalog.validate(&latte(), DrinkType::HotCoffee));
    }

    #[test]
    fn should_reject_a_drink_with_a_forbidden_topping() {
        let catalog = RecipeCatalog::new();
        let mut composition = latte();
        // La clasificacion ignora los higos cuando hay cafe, la receta no
        composition.add_topping(Topping::Fig);
        assert_eq!(false, catalog.validate(&composition, DrinkType::Latte));
    }

    #[test]
    fn should_reject_a_fig_tea_with_extra_toppings() {
        let catalog = RecipeCatalog::new();
        let mut composition = DrinkComposition::new();
        composition.add_topping(Topping::Fig);
        composition.add_topping(Topping::Milk);
        assert_eq!(false, catalog.validate(&composition, DrinkType::FigTeaOnly));
    }

    #[test]
    fn every_drink_type_has_a_definition() {
        let catalog = RecipeCatalog::new();
        for drink_type in DrinkType::ALL {
            assert_eq!(drink_type, catalog.definition_of(drink_type).drink_type);
        }
    }
}
