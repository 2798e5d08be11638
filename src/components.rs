mod confirm_delete;
pub use confirm_delete::*;
mod form;
pub use form::*;
mod notices;
pub use notices::*;
mod skeleton;
pub use skeleton::*;
mod table;
pub use table::*;
