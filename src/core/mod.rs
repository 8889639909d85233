pub mod analysis;
pub mod extract;
pub mod transcript;

pub use analysis::*;
pub use extract::*;
pub use transcript::*;
