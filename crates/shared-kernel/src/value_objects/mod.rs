// crates/shared-kernel/src/value_objects/mod.rs
pub mod category;
pub mod numeral;

pub use category::Category;
pub use numeral::{DigitLength, Numeral};
