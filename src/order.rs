//! Pedidos registrados por la cafeteria
use std::fmt;

use serde::Serialize;

use crate::coffee::{Coffee, CoffeeId};
use crate::customer::{Customer, CustomerId};
use crate::shop::CoffeeShop;

/// Identificador de un pedido dentro del registro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(pub(crate) usize);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Un pedido ya registrado. Relaciona a un cliente con un cafe y guarda
/// el precio pagado. Ninguno de sus campos puede modificarse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    customer: CustomerId,
    coffee: CoffeeId,
    price: f64,
}

impl Order {
    pub(crate) fn new(id: OrderId, customer: CustomerId, coffee: CoffeeId, price: f64) -> Order {
        Order {
            id,
            customer,
            coffee,
            price,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer
    }

    pub fn coffee_id(&self) -> CoffeeId {
        self.coffee
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Cliente que realizo el pedido
    pub fn customer<'a>(&self, shop: &'a CoffeeShop) -> Option<&'a Customer> {
        shop.customer(self.customer)
    }

    /// Cafe que se pidio
    pub fn coffee<'a>(&self, shop: &'a CoffeeShop) -> Option<&'a Coffee> {
        shop.coffee(self.coffee)
    }
}
