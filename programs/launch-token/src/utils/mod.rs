pub mod token;
pub mod validation;

pub use token::*;
pub use validation::*;
