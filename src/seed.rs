//! Carga del estado inicial de la cafeteria desde un JSON
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::coffee::CoffeeId;
use crate::customer::CustomerId;
use crate::errors::SeedError;
use crate::shop::CoffeeShop;

#[derive(Deserialize, Debug)]
struct JsonCoffee {
    name: String,
}

#[derive(Deserialize, Debug)]
struct JsonCustomer {
    name: String,
}

#[derive(Deserialize, Debug)]
struct JsonOrder {
    customer: String,
    coffee: String,
    price: f64,
}

#[derive(Deserialize)]
struct ShopConfiguration {
    #[serde(default)]
    coffees: Vec<JsonCoffee>,
    #[serde(default)]
    customers: Vec<JsonCustomer>,
    #[serde(default)]
    orders: Vec<JsonOrder>,
}

/// Crea una cafeteria a partir de un documento JSON con el menu, los
/// clientes y los pedidos iniciales. Los pedidos referencian a los cafes
/// y clientes por nombre; si un nombre aparece repetido se resuelve a la
/// primera aparicion.
pub fn load_shop(json: &str) -> Result<CoffeeShop, SeedError> {
    let config: ShopConfiguration = serde_json::from_str(json)?;
    populate_shop(config)
}

/// Igual que `load_shop`, pero leyendo el documento del archivo indicado
pub fn load_shop_from_file<P: AsRef<Path>>(path: P) -> Result<CoffeeShop, SeedError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: ShopConfiguration = serde_json::from_reader(reader)?;
    populate_shop(config)
}

fn populate_shop(config: ShopConfiguration) -> Result<CoffeeShop, SeedError> {
    let mut shop = CoffeeShop::new();
    let mut coffee_ids: HashMap<String, CoffeeId> = HashMap::new();
    let mut customer_ids: HashMap<String, CustomerId> = HashMap::new();

    for coffee in config.coffees {
        let id = shop.add_coffee(coffee.name.as_str())?;
        debug!("[SEED] Added coffee {} with id {}", coffee.name, id);
        coffee_ids.entry(coffee.name).or_insert(id);
    }

    for customer in config.customers {
        let id = shop.add_customer(customer.name.as_str())?;
        debug!("[SEED] Added customer {} with id {}", customer.name, id);
        customer_ids.entry(customer.name).or_insert(id);
    }

    for order in config.orders {
        let customer_id = match customer_ids.get(&order.customer) {
            Some(id) => *id,
            None => return Err(SeedError::UnknownCustomerName(order.customer)),
        };
        let coffee_id = match coffee_ids.get(&order.coffee) {
            Some(id) => *id,
            None => return Err(SeedError::UnknownCoffeeName(order.coffee)),
        };
        let id = shop.place_order(customer_id, coffee_id, order.price)?;
        debug!(
            "[SEED] Placed order {} of {} for {}",
            id, order.coffee, order.customer
        );
    }

    info!(
        "[SEED] Loaded {} coffees, {} customers and {} orders",
        shop.coffees().len(),
        shop.customers().len(),
        shop.orders().len()
    );
    Ok(shop)
}
