//! Ingredientes de la cafeteria y sus datos de presentacion

use serde::Deserialize;

/// Todo lo que se puede agotar en la cafeteria, incluyendo los vasos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    CoffeeBeans,
    Milk,
    Strawberry,
    Carambola,
    Fig,
    Ice,
    Cup,
}

impl Ingredient {
    pub const ALL: [Ingredient; 7] = [
        Ingredient::CoffeeBeans,
        Ingredient::Milk,
        Ingredient::Strawberry,
        Ingredient::Carambola,
        Ingredient::Fig,
        Ingredient::Ice,
        Ingredient::Cup,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Ingredient::CoffeeBeans => "coffee beans",
            Ingredient::Milk => "milk",
            Ingredient::Strawberry => "strawberry jam",
            Ingredient::Carambola => "carambola slices",
            Ingredient::Fig => "dried figs",
            Ingredient::Ice => "ice",
            Ingredient::Cup => "cups",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Ingredient::CoffeeBeans => "g",
            Ingredient::Milk => "ml",
            Ingredient::Strawberry => "g",
            Ingredient::Carambola => "slices",
            Ingredient::Fig => "pieces",
            Ingredient::Ice => "cubes",
            Ingredient::Cup => "units",
        }
    }
}

/// Subconjunto de ingredientes que pueden caer en el vaso como agregado.
/// Los granos y los vasos pasan por la maquina, nunca directo a la bebida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topping {
    Milk,
    Strawberry,
    Carambola,
    Fig,
    Ice,
}

impl Topping {
    pub const ALL: [Topping; 5] = [
        Topping::Milk,
        Topping::Strawberry,
        Topping::Carambola,
        Topping::Fig,
        Topping::Ice,
    ];

    /// Entrada de stock de la que descuenta este agregado.
    pub fn ingredient(&self) -> Ingredient {
        match self {
            Topping::Milk => Ingredient::Milk,
            Topping::Strawberry => Ingredient::Strawberry,
            Topping::Carambola => Ingredient::Carambola,
            Topping::Fig => Ingredient::Fig,
            Topping::Ice => Ingredient::Ice,
        }
    }
}
