//! Parametros de configuracion de la cafeteria

/// Stock inicial de granos de cafe
pub const COFFEE_BEANS_STORAGE: u64 = 100;

/// Capacidad maxima de granos de cafe
pub const COFFEE_BEANS_CAPACITY: u64 = 200;

/// Stock inicial de leche
pub const MILK_STORAGE: u64 = 50;

/// Capacidad maxima de leche
pub const MILK_CAPACITY: u64 = 100;

/// Stock inicial de mermelada de frutilla
pub const STRAWBERRY_STORAGE: u64 = 30;

/// Capacidad maxima de mermelada de frutilla
pub const STRAWBERRY_CAPACITY: u64 = 100;

/// Stock inicial de rodajas de carambola
pub const CARAMBOLA_STORAGE: u64 = 20;

/// Capacidad maxima de rodajas de carambola
pub const CARAMBOLA_CAPACITY: u64 = 100;

/// Stock inicial de higos secos
pub const FIG_STORAGE: u64 = 15;

/// Capacidad maxima de higos secos
pub const FIG_CAPACITY: u64 = 100;

/// Stock inicial de hielo
pub const ICE_STORAGE: u64 = 200;

/// Capacidad maxima de hielo
pub const ICE_CAPACITY: u64 = 200;

/// Stock inicial de vasos
pub const CUP_STORAGE: u64 = 10;

/// Capacidad maxima de vasos
pub const CUP_CAPACITY: u64 = 50;

/// Granos que se muelen por cada cafe
pub const COFFEE_BEANS_PER_GRIND: u64 = 10;

/// Leche que consume un latte
pub const MILK_PER_SERVING: u64 = 5;

/// Mermelada que consume un latte de frutilla
pub const STRAWBERRY_PER_SERVING: u64 = 3;

/// Rodajas que consume un americano de carambola
pub const CARAMBOLA_PER_SERVING: u64 = 1;

/// Higos que consume un te de higos
pub const FIG_PER_SERVING: u64 = 1;

/// Cubos de hielo que consume una bebida fria
pub const ICE_PER_SERVING: u64 = 3;

/// Vasos que consume cada bebida
pub const CUPS_PER_SERVING: u64 = 1;

/// Paciencia base de un cliente, en ticks
pub const BASE_PATIENCE: f32 = 30.0;

/// Paciencia que pierde un cliente al recibir una bebida equivocada
pub const MISMATCH_PATIENCE_PENALTY: f32 = 10.0;

/// Fraccion de la paciencia maxima que recupera un te de higos
pub const FIG_TEA_PATIENCE_RESTORE: f32 = 0.3;

/// Factor de paciencia de un cliente impaciente
pub const IMPATIENT_PATIENCE_FACTOR: f32 = 0.6;

/// Multiplicador de recompensa de un cliente VIP
pub const VIP_REWARD_MULTIPLIER: f32 = 1.5;

/// Cantidad maxima de clientes esperando a la vez
pub const MAX_WAITING_CUSTOMERS: usize = 5;

/// Espera minima entre llegadas de clientes, en ticks
pub const MIN_SPAWN_GAP: u64 = 5;

/// Espera maxima entre llegadas de clientes, en ticks
pub const MAX_SPAWN_GAP: u64 = 15;

/// Duracion de un tick de la sesion
pub const TICK_DURATION: f32 = 1.0;

/// Ticks que dura una sesion
pub const SESSION_TICKS: u64 = 200;

/// Nivel del local, controla la mezcla de clientes del spawner
pub const SHOP_LEVEL: u32 = 3;
