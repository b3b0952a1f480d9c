/// Application layer - Use cases, DTOs and the streaming adapter
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod streaming;
pub mod use_cases;
