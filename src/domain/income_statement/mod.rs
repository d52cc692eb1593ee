//! Income statement aggregate: the fiscal period record, user-facing filter and
//! sort value objects, and the pure filter/sort pipeline.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
