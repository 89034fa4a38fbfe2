//! Cafes del menu de la cafeteria
use std::fmt;

use serde::Serialize;

use crate::customer::Customer;
use crate::order::Order;
use crate::shop::CoffeeShop;

/// Identificador de un cafe dentro del registro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CoffeeId(pub(crate) usize);

impl fmt::Display for CoffeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Un cafe del menu. Su nombre queda fijo al momento de crearlo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coffee {
    id: CoffeeId,
    name: String,
}

impl Coffee {
    pub(crate) fn new(id: CoffeeId, name: String) -> Coffee {
        Coffee { id, name }
    }

    pub fn id(&self) -> CoffeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pedidos registrados para este cafe, en orden de creacion
    pub fn orders<'a>(&self, shop: &'a CoffeeShop) -> Vec<&'a Order> {
        shop.orders()
            .iter()
            .filter(|order| order.coffee_id() == self.id)
            .collect()
    }

    /// Clientes que pidieron este cafe, sin repetidos y en orden de aparicion
    pub fn customers<'a>(&self, shop: &'a CoffeeShop) -> Vec<&'a Customer> {
        let mut seen = Vec::new();
        let mut customers = Vec::new();
        for order in self.orders(shop) {
            if seen.contains(&order.customer_id()) {
                continue;
            }
            seen.push(order.customer_id());
            if let Some(customer) = shop.customer(order.customer_id()) {
                customers.push(customer);
            }
        }
        customers
    }

    pub fn num_orders(&self, shop: &CoffeeShop) -> usize {
        self.orders(shop).len()
    }

    /// Precio promedio pagado por este cafe. Si no tiene pedidos devuelve 0.0
    pub fn average_price(&self, shop: &CoffeeShop) -> f64 {
        let orders = self.orders(shop);
        if orders.is_empty() {
            return 0.0;
        }
        let total: f64 = orders.iter().map(|order| order.price()).sum();
        total / orders.len() as f64
    }
}

impl fmt::Display for Coffee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
