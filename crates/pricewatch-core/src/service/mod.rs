//! Services combining store operations with hub broadcasts.

mod client;
mod product;

pub use client::ClientService;
pub use product::ProductService;
