/// Domain layer - inventory model and pure domain services
pub mod domain;
pub mod services;
