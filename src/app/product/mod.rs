//! 产品资源：模型、仓储与处理器

pub mod handler;
pub mod memory;
pub mod model;
#[cfg(feature = "database")]
pub mod postgres;
pub mod repository;

pub use memory::InMemoryProductRepository;
pub use model::{Product, ProductPayload};
#[cfg(feature = "database")]
pub use postgres::PgProductRepository;
pub use repository::{ProductRepository, RepositoryError};
