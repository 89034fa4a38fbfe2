//! Acceso compartido a una cafeteria entre varios hilos
use std::sync::{Arc, RwLock};

use crate::coffee::CoffeeId;
use crate::customer::CustomerId;
use crate::errors::ShopError;
use crate::order::OrderId;
use crate::shop::CoffeeShop;

/// Manija clonable para operar una misma cafeteria desde varios hilos.
/// Cada operacion toma el lock y delega en `CoffeeShop`. Las consultas
/// se hacen sobre una copia obtenida con `snapshot`.
#[derive(Clone)]
pub struct SharedShop {
    shop: Arc<RwLock<CoffeeShop>>,
}

impl SharedShop {
    pub fn new() -> SharedShop {
        SharedShop {
            shop: Arc::new(RwLock::new(CoffeeShop::new())),
        }
    }

    pub fn add_coffee(&self, name: impl Into<String>) -> Result<CoffeeId, ShopError> {
        Ok(self.shop.write()?.add_coffee(name)?)
    }

    pub fn add_customer(&self, name: impl Into<String>) -> Result<CustomerId, ShopError> {
        Ok(self.shop.write()?.add_customer(name)?)
    }

    pub fn rename_customer(
        &self,
        id: CustomerId,
        name: impl Into<String>,
    ) -> Result<(), ShopError> {
        Ok(self.shop.write()?.rename_customer(id, name)?)
    }

    pub fn rename_coffee(&self, id: CoffeeId, name: impl Into<String>) -> Result<(), ShopError> {
        Ok(self.shop.write()?.rename_coffee(id, name)?)
    }

    pub fn place_order(
        &self,
        customer: CustomerId,
        coffee: CoffeeId,
        price: impl Into<f64>,
    ) -> Result<OrderId, ShopError> {
        Ok(self.shop.write()?.place_order(customer, coffee, price)?)
    }

    pub fn reset(&self) -> Result<(), ShopError> {
        self.shop.write()?.reset();
        Ok(())
    }

    /// Copia del estado actual, para consultarlo sin retener el lock
    pub fn snapshot(&self) -> Result<CoffeeShop, ShopError> {
        Ok(self.shop.read()?.clone())
    }
}
