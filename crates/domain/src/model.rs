pub mod change;
pub mod interval;
pub mod pattern;
pub mod range;

pub use change::{ChangeKind, ChangeRecord};
pub use interval::MergedInterval;
pub use pattern::{DigitSet, Pattern};
pub use range::NumberRange;

pub use mx_numplan_shared_kernel::{Category, DigitLength, Numeral};
