mod user;
pub use user::*;

mod validation;
pub use validation::*;
