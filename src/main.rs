use coffee_shop::{logging, seed};
use log::error;

fn main() {
    logging::init();
    let shop = match seed::load_shop_from_file("shop.json") {
        Ok(shop) => shop,
        Err(e) => {
            error!("[SHOP] Could not load shop.json: {}", e);
            return;
        }
    };

    println!(
        "[STATISTICS] Coffees={} | Customers={} | Orders={}",
        shop.coffees().len(),
        shop.customers().len(),
        shop.orders().len()
    );
    for coffee in shop.coffees() {
        println!(
            "[STATISTICS] {}: orders={} average_price={}",
            coffee,
            coffee.num_orders(&shop),
            coffee.average_price(&shop)
        );
    }
}
