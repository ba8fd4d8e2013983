pub mod sphere;
pub mod utils;

pub use sphere::*;
pub use utils::*;
