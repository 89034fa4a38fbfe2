//! Contexto central de la cafeteria
use log::debug;

use crate::coffee::{Coffee, CoffeeId};
use crate::constants::{
    MAX_CUSTOMER_NAME_LEN, MAX_ORDER_PRICE, MIN_COFFEE_NAME_LEN, MIN_CUSTOMER_NAME_LEN,
    MIN_ORDER_PRICE,
};
use crate::customer::{Customer, CustomerId};
use crate::errors::{ImmutableAttributeError, ValidationError};
use crate::order::{Order, OrderId};

/// La cafeteria. Mantiene los registros de cafes, clientes y pedidos.
/// Los registros solo crecen y conservan el orden de creacion, salvo
/// que se los vacie con `reset`.
#[derive(Debug, Clone)]
pub struct CoffeeShop {
    coffees: Vec<Coffee>,
    customers: Vec<Customer>,
    orders: Vec<Order>,
}

impl CoffeeShop {
    pub fn new() -> CoffeeShop {
        CoffeeShop {
            coffees: Vec::new(),
            customers: Vec::new(),
            orders: Vec::new(),
        }
    }

    /// Agrega un cafe al menu y devuelve su identificador
    pub fn add_coffee(&mut self, name: impl Into<String>) -> Result<CoffeeId, ValidationError> {
        let name = name.into();
        validate_coffee_name(&name)?;
        let id = CoffeeId(self.coffees.len());
        debug!("[SHOP] Added coffee {} with id {}", name, id);
        self.coffees.push(Coffee::new(id, name));
        Ok(id)
    }

    /// Registra un cliente y devuelve su identificador
    pub fn add_customer(&mut self, name: impl Into<String>) -> Result<CustomerId, ValidationError> {
        let name = name.into();
        validate_customer_name(&name)?;
        let id = CustomerId(self.customers.len());
        debug!("[SHOP] Added customer {} with id {}", name, id);
        self.customers.push(Customer::new(id, name));
        Ok(id)
    }

    /// Cambia el nombre de un cliente, validando el nombre nuevo antes de pisarlo
    pub fn rename_customer(
        &mut self,
        id: CustomerId,
        name: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        let customer = self
            .customers
            .get_mut(id.0)
            .ok_or(ValidationError::UnknownCustomer(id))?;
        validate_customer_name(&name)?;
        debug!("[SHOP] Renamed customer {} to {}", id, name);
        customer.set_name(name);
        Ok(())
    }

    /// El nombre de un cafe es de solo lectura, este metodo siempre falla
    pub fn rename_coffee(
        &mut self,
        _id: CoffeeId,
        _name: impl Into<String>,
    ) -> Result<(), ImmutableAttributeError> {
        Err(ImmutableAttributeError {
            entity: "coffee",
            attribute: "name",
        })
    }

    /// Registra un pedido. Valida al cliente, al cafe y el precio, en ese orden.
    /// Si algo falla no se agrega nada al registro.
    pub fn place_order(
        &mut self,
        customer: CustomerId,
        coffee: CoffeeId,
        price: impl Into<f64>,
    ) -> Result<OrderId, ValidationError> {
        if self.customer(customer).is_none() {
            return Err(ValidationError::UnknownCustomer(customer));
        }
        if self.coffee(coffee).is_none() {
            return Err(ValidationError::UnknownCoffee(coffee));
        }
        let price = price.into();
        validate_price(price)?;
        let id = OrderId(self.orders.len());
        debug!(
            "[SHOP] Placed order {} of coffee {} for customer {} at {}",
            id, coffee, customer, price
        );
        self.orders.push(Order::new(id, customer, coffee, price));
        Ok(id)
    }

    pub fn coffee(&self, id: CoffeeId) -> Option<&Coffee> {
        self.coffees.get(id.0)
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(id.0)
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id.0)
    }

    pub fn coffees(&self) -> &[Coffee] {
        &self.coffees
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Vacia los tres registros a la vez. Los identificadores repartidos
    /// hasta ese momento dejan de ser validos.
    pub fn reset(&mut self) {
        debug!(
            "[SHOP] Cleared {} coffees, {} customers and {} orders",
            self.coffees.len(),
            self.customers.len(),
            self.orders.len()
        );
        self.coffees.clear();
        self.customers.clear();
        self.orders.clear();
    }
}

fn validate_coffee_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length < MIN_COFFEE_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: "coffee.name",
            min: MIN_COFFEE_NAME_LEN,
            actual: length,
        });
    }
    Ok(())
}

fn validate_customer_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length < MIN_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: "customer.name",
            min: MIN_CUSTOMER_NAME_LEN,
            actual: length,
        });
    }
    if length > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer.name",
            max: MAX_CUSTOMER_NAME_LEN,
            actual: length,
        });
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !(MIN_ORDER_PRICE..=MAX_ORDER_PRICE).contains(&price) {
        return Err(ValidationError::OutOfRange {
            field: "order.price",
            min: MIN_ORDER_PRICE,
            max: MAX_ORDER_PRICE,
            actual: price,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_empty_registries() {
        let shop = CoffeeShop::new();
        assert_eq!(true, shop.coffees().is_empty());
        assert_eq!(true, shop.customers().is_empty());
        assert_eq!(true, shop.orders().is_empty());
    }

    #[test]
    fn should_keep_coffees_in_creation_order() {
        let mut shop = CoffeeShop::new();
        shop.add_coffee("Latte").unwrap();
        shop.add_coffee("Espresso").unwrap();
        shop.add_coffee("Mocha").unwrap();

        let names: Vec<&str> = shop.coffees().iter().map(|c| c.name()).collect();
        assert_eq!(vec!["Latte", "Espresso", "Mocha"], names);
    }

    #[test]
    fn should_keep_customers_in_creation_order() {
        let mut shop = CoffeeShop::new();
        shop.add_customer("Alice").unwrap();
        shop.add_customer("Bob").unwrap();

        let names: Vec<&str> = shop.customers().iter().map(|c| c.name()).collect();
        assert_eq!(vec!["Alice", "Bob"], names);
    }

    #[test]
    fn should_keep_orders_in_creation_order() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let espresso = shop.add_coffee("Espresso").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        let bob = shop.add_customer("Bob").unwrap();
        shop.place_order(alice, latte, 4.5).unwrap();
        shop.place_order(bob, espresso, 3.0).unwrap();
        shop.place_order(alice, latte, 5.5).unwrap();

        let placed: Vec<(CustomerId, CoffeeId, f64)> = shop
            .orders()
            .iter()
            .map(|o| (o.customer_id(), o.coffee_id(), o.price()))
            .collect();
        assert_eq!(
            vec![
                (alice, latte, 4.5),
                (bob, espresso, 3.0),
                (alice, latte, 5.5),
            ],
            placed
        );
    }

    #[test]
    fn should_look_up_entities_by_their_id() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        let order = shop.place_order(alice, latte, 4.5).unwrap();

        assert_eq!(latte, shop.coffee(latte).unwrap().id());
        assert_eq!(alice, shop.customer(alice).unwrap().id());
        assert_eq!(order, shop.order(order).unwrap().id());
    }

    #[test]
    fn should_return_none_for_an_unknown_id() {
        let shop = CoffeeShop::new();
        assert_eq!(true, shop.coffee(CoffeeId(0)).is_none());
        assert_eq!(true, shop.customer(CustomerId(0)).is_none());
        assert_eq!(true, shop.order(OrderId(0)).is_none());
    }

    #[test]
    fn should_coerce_an_integral_price_to_float() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        let order = shop.place_order(alice, latte, 5).unwrap();
        assert_eq!(5.0, shop.order(order).unwrap().price());
    }

    #[test]
    fn should_accept_the_price_boundaries() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        let cheapest = shop.place_order(alice, latte, 1.0).unwrap();
        let priciest = shop.place_order(alice, latte, 10.0).unwrap();
        assert_eq!(1.0, shop.order(cheapest).unwrap().price());
        assert_eq!(10.0, shop.order(priciest).unwrap().price());
    }

    #[test]
    fn should_reject_a_price_just_below_the_minimum() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        let result = shop.place_order(alice, latte, 0.99);
        assert_eq!(
            Err(ValidationError::OutOfRange {
                field: "order.price",
                min: 1.0,
                max: 10.0,
                actual: 0.99,
            }),
            result
        );
    }

    #[test]
    fn should_reject_a_price_just_above_the_maximum() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        let result = shop.place_order(alice, latte, 10.01);
        assert_eq!(
            Err(ValidationError::OutOfRange {
                field: "order.price",
                min: 1.0,
                max: 10.0,
                actual: 10.01,
            }),
            result
        );
    }

    #[test]
    fn should_reject_a_nan_price() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        let result = shop.place_order(alice, latte, f64::NAN);
        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { actual, .. }) if actual.is_nan()
        ));
        assert_eq!(true, shop.orders().is_empty());
    }

    #[test]
    fn should_reject_an_order_for_an_unknown_customer() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let result = shop.place_order(CustomerId(3), latte, 4.5);
        assert_eq!(Err(ValidationError::UnknownCustomer(CustomerId(3))), result);
    }

    #[test]
    fn should_reject_an_order_for_an_unknown_coffee() {
        let mut shop = CoffeeShop::new();
        let alice = shop.add_customer("Alice").unwrap();
        let result = shop.place_order(alice, CoffeeId(3), 4.5);
        assert_eq!(Err(ValidationError::UnknownCoffee(CoffeeId(3))), result);
    }

    #[test]
    fn should_check_the_customer_before_the_coffee() {
        let mut shop = CoffeeShop::new();
        let result = shop.place_order(CustomerId(0), CoffeeId(0), 4.5);
        assert_eq!(Err(ValidationError::UnknownCustomer(CustomerId(0))), result);
    }

    #[test]
    fn should_leave_the_registries_unchanged_when_an_order_fails() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        let result = shop.place_order(alice, latte, 0.5);
        assert_eq!(true, result.is_err());
        assert_eq!(true, shop.orders().is_empty());
        assert_eq!(1, shop.coffees().len());
        assert_eq!(1, shop.customers().len());
    }

    #[test]
    fn should_reset_every_registry() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        shop.place_order(alice, latte, 4.5).unwrap();

        shop.reset();
        assert_eq!(true, shop.coffees().is_empty());
        assert_eq!(true, shop.customers().is_empty());
        assert_eq!(true, shop.orders().is_empty());

        let mocha = shop.add_coffee("Mocha").unwrap();
        assert_eq!("Mocha", shop.coffee(mocha).unwrap().name());
        assert_eq!(1, shop.coffees().len());
    }

    #[test]
    fn should_answer_the_relationship_queries_end_to_end() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();
        let espresso = shop.add_coffee("Espresso").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        let bob = shop.add_customer("Bob").unwrap();
        shop.place_order(alice, latte, 4.5).unwrap();
        shop.place_order(bob, espresso, 3.0).unwrap();
        shop.place_order(alice, latte, 5.5).unwrap();

        let latte = shop.coffee(latte).unwrap();
        let espresso = shop.coffee(espresso).unwrap();
        let alice = shop.customer(alice).unwrap();
        let bob = shop.customer(bob).unwrap();

        assert_eq!(2, latte.num_orders(&shop));
        assert_eq!(5.0, latte.average_price(&shop));
        let latte_customers: Vec<&str> =
            latte.customers(&shop).iter().map(|c| c.name()).collect();
        assert_eq!(vec!["Alice"], latte_customers);
        let espresso_customers: Vec<&str> =
            espresso.customers(&shop).iter().map(|c| c.name()).collect();
        assert_eq!(vec!["Bob"], espresso_customers);

        assert_eq!(2, alice.orders(&shop).len());
        let alice_coffees: Vec<&str> = alice.coffees(&shop).iter().map(|c| c.name()).collect();
        assert_eq!(vec!["Latte"], alice_coffees);
        let bob_coffees: Vec<&str> = bob.coffees(&shop).iter().map(|c| c.name()).collect();
        assert_eq!(vec!["Espresso"], bob_coffees);
    }
}
