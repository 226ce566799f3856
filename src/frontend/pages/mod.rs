mod audit;
mod users;

pub use audit::*;
pub use users::*;
