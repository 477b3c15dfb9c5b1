//! Entity model definitions

pub mod villa;
pub mod villa_number;

pub use villa::Villa;
pub use villa_number::VillaNumber;
