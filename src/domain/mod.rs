/// Domain layer - model types, errors and the ports the client talks through
/// This layer has no dependencies on outer layers

pub mod entities;
pub mod enums;
pub mod errors;
pub mod model;
pub mod operation;
pub mod repositories;
pub mod shape;

pub use entities::*;
pub use enums::*;
pub use errors::*;
pub use model::*;
pub use operation::*;
pub use repositories::*;
pub use shape::{Blob, RateLimit};
