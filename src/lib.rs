//! Modelo en memoria de una cafeteria: cafes, clientes y pedidos.
//! Los registros solo crecen y las consultas se responden siempre
//! sobre el estado actual.
pub mod coffee;
pub mod constants;
pub mod customer;
pub mod errors;
pub mod logging;
pub mod order;
pub mod seed;
pub mod shared;
pub mod shop;

pub use coffee::{Coffee, CoffeeId};
pub use customer::{Customer, CustomerId};
pub use errors::{ImmutableAttributeError, SeedError, ShopError, ValidationError};
pub use order::{Order, OrderId};
pub use shared::SharedShop;
pub use shop::CoffeeShop;
