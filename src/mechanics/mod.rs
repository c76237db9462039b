pub mod score;
pub mod stoch;

pub use score::*;
pub use stoch::*;
