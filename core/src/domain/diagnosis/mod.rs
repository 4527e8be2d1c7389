pub mod aliases;
pub mod coercion;
pub mod entities;
pub mod fallback;
pub mod normalizer;
pub mod ports;
pub mod segmentation;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
