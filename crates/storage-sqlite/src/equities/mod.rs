mod model;
mod repository;

pub use model::EquityDB;
pub use repository::EquityRepository;
