pub mod card;
pub mod errors;

pub use errors::DomainError;
