use std::fmt;

use crate::coffee::CoffeeId;
use crate::customer::CustomerId;

/// Error de validacion al crear o modificar una entidad del registro
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        actual: f64,
    },
    UnknownCustomer(CustomerId),
    UnknownCoffee(CoffeeId),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TooShort { field, min, actual } => {
                write!(f, "{} too short (min: {}, actual: {})", field, min, actual)
            }
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} too long (max: {}, actual: {})", field, max, actual)
            }
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                write!(
                    f,
                    "{} out of range (min: {}, max: {}, actual: {})",
                    field, min, max, actual
                )
            }
            ValidationError::UnknownCustomer(id) => {
                write!(f, "customer {} is not registered", id)
            }
            ValidationError::UnknownCoffee(id) => {
                write!(f, "coffee {} is not registered", id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error al intentar reasignar un atributo de solo lectura
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImmutableAttributeError {
    pub entity: &'static str,
    pub attribute: &'static str,
}

impl fmt::Display for ImmutableAttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} is read-only and cannot be reassigned",
            self.entity, self.attribute
        )
    }
}

impl std::error::Error for ImmutableAttributeError {}

/// Error general de la cafeteria, engloba a los demas
#[derive(Debug, Clone, PartialEq)]
pub enum ShopError {
    Validation(ValidationError),
    Immutable(ImmutableAttributeError),
    LockError,
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::Validation(e) => write!(f, "{}", e),
            ShopError::Immutable(e) => write!(f, "{}", e),
            ShopError::LockError => write!(f, "a shop lock was poisoned"),
        }
    }
}

impl std::error::Error for ShopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShopError::Validation(e) => Some(e),
            ShopError::Immutable(e) => Some(e),
            ShopError::LockError => None,
        }
    }
}

impl From<ValidationError> for ShopError {
    fn from(e: ValidationError) -> Self {
        ShopError::Validation(e)
    }
}

impl From<ImmutableAttributeError> for ShopError {
    fn from(e: ImmutableAttributeError) -> Self {
        ShopError::Immutable(e)
    }
}

impl<T> From<std::sync::PoisonError<T>> for ShopError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        ShopError::LockError
    }
}

/// Error al cargar el estado inicial de la cafeteria desde un JSON
#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(ValidationError),
    UnknownCoffeeName(String),
    UnknownCustomerName(String),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "could not read the seed file: {}", e),
            SeedError::Parse(e) => write!(f, "could not parse the seed file: {}", e),
            SeedError::Invalid(e) => write!(f, "invalid seed entry: {}", e),
            SeedError::UnknownCoffeeName(name) => {
                write!(f, "the seed orders reference an unknown coffee: {}", name)
            }
            SeedError::UnknownCustomerName(name) => {
                write!(f, "the seed orders reference an unknown customer: {}", name)
            }
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Io(e) => Some(e),
            SeedError::Parse(e) => Some(e),
            SeedError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SeedError {
    fn from(e: std::io::Error) -> Self {
        SeedError::Io(e)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(e: serde_json::Error) -> Self {
        SeedError::Parse(e)
    }
}

impl From<ValidationError> for SeedError {
    fn from(e: ValidationError) -> Self {
        SeedError::Invalid(e)
    }
}
