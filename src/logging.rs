//! Inicializacion del log de la cafeteria
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Inicializa el logger global en nivel `Info`. Puede llamarse mas de
/// una vez; las llamadas siguientes no tienen efecto.
pub fn init() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .ok();
}
