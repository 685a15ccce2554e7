//! Domain types shared by actors and clients.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod user;

pub use cart::*;
pub use catalog::*;
pub use order::*;
pub use user::*;
