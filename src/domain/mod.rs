mod clock;
mod holiday;
mod validation;

pub use clock::*;
pub use holiday::*;
pub use validation::*;
