// Domain layer: search entities and the state they drive
pub mod models;
pub mod services;
