pub mod dice;
pub mod error;

pub use error::{GreysteelError, Result};
