//! Parametros de validacion de la cafeteria

/// Largo minimo (en caracteres) del nombre de un cafe
pub const MIN_COFFEE_NAME_LEN: usize = 3;

/// Largo minimo (en caracteres) del nombre de un cliente
pub const MIN_CUSTOMER_NAME_LEN: usize = 1;

/// Largo maximo (en caracteres) del nombre de un cliente
pub const MAX_CUSTOMER_NAME_LEN: usize = 15;

/// Precio minimo que puede tener un pedido (inclusive)
pub const MIN_ORDER_PRICE: f64 = 1.0;

/// Precio maximo que puede tener un pedido (inclusive)
pub const MAX_ORDER_PRICE: f64 = 10.0;
