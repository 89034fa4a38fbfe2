//! Clientes de la cafeteria
use std::fmt;

use serde::Serialize;

use crate::coffee::{Coffee, CoffeeId};
use crate::errors::ValidationError;
use crate::order::{Order, OrderId};
use crate::shop::CoffeeShop;

/// Identificador de un cliente dentro del registro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(pub(crate) usize);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Un cliente registrado. Su nombre puede cambiarse despues de creado.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    pub(crate) fn new(id: CustomerId, name: String) -> Customer {
        Customer { id, name }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pedidos registrados para este cliente, en orden de creacion
    pub fn orders<'a>(&self, shop: &'a CoffeeShop) -> Vec<&'a Order> {
        shop.orders()
            .iter()
            .filter(|order| order.customer_id() == self.id)
            .collect()
    }

    /// Cafes distintos que pidio este cliente, en orden de aparicion
    pub fn coffees<'a>(&self, shop: &'a CoffeeShop) -> Vec<&'a Coffee> {
        let mut seen = Vec::new();
        let mut coffees = Vec::new();
        for order in self.orders(shop) {
            if seen.contains(&order.coffee_id()) {
                continue;
            }
            seen.push(order.coffee_id());
            if let Some(coffee) = shop.coffee(order.coffee_id()) {
                coffees.push(coffee);
            }
        }
        coffees
    }

    /// Registra un pedido de este cliente. Atajo de `CoffeeShop::place_order`
    pub fn create_order(
        &self,
        shop: &mut CoffeeShop,
        coffee: CoffeeId,
        price: impl Into<f64>,
    ) -> Result<OrderId, ValidationError> {
        shop.place_order(self.id, coffee, price)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
