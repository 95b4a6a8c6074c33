//! Estadisticas de la sesion
use crate::ingredient::Ingredient;
use crate::inventory::InventoryLedger;

/// Contadores de la sesion. Los actualiza el orquestador y se imprimen
/// al final o cuando se lo pida.
#[derive(Debug, Default)]
pub struct SessionStatistics {
    pub drinks_served: u64,
    pub customers_served: u64,
    pub customers_lost: u64,
    pub mismatches: u64,
    pub money_earned: u64,
}

impl SessionStatistics {
    pub fn new() -> SessionStatistics {
        SessionStatistics::default()
    }

    /// Linea de resumen con los contadores y el stock restante por
    /// ingrediente en formato `Ingredient=(remaining, consumed)`.
    pub fn summary_line(&self, ledger: &InventoryLedger) -> String {
        let mut summary = format!(
            "[STATISTICS] Money={} | Drinks served={} | Customers served={} lost={} | Wrong drinks={} | Ingredient=(remaining, consumed) |",
            self.money_earned,
            self.drinks_served,
            self.customers_served,
            self.customers_lost,
            self.mismatches
        );
        for ingredient in Ingredient::ALL {
            if let Some(stock) = ledger.stock(ingredient) {
                summary.push_str(&format!(
                    " {:?}=({},{}) ",
                    ingredient, stock.current, stock.consumed
                ));
            }
        }
        summary
    }

    pub fn print_summary(&self, ledger: &InventoryLedger) {
        println!("{}", self.summary_line(ledger));
    }
}
