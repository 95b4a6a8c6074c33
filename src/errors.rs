use crate::ingredient::Ingredient;

/// Errores recuperables de la cafeteria. Ninguno es fatal,
/// el que llama avisa y el estado previo queda intacto.
#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeShopError {
    /// No alcanza el stock del ingrediente para la operacion pedida
    InsufficientStock(Ingredient),
    /// Se intento agregar dos veces el mismo agregado al vaso
    DuplicateIngredient(Ingredient),
    /// Operacion sobre la maquina en un estado que no la permite
    /// (servir un vaso vacio, poner un segundo vaso, etc.)
    InvalidPlacement,
    /// La bebida servida no coincide con ningun pedido pendiente del cliente
    RecipeMismatch,
    /// No se pudo leer o interpretar el archivo de escenario
    ScenarioFileError,
}
