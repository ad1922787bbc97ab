//! Domain data types: menu items, orders, users, and their DTOs.

pub mod menu;
pub mod order;
pub mod user;

pub use menu::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, MenuItemUpsert};
pub use order::{
    Order, OrderCreate, OrderFilter, OrderId, OrderLine, PlaceOrder, RequestedLine, OrderStatus,
};
pub use user::{Credentials, Principal, Role, User, UserCreate, UserFilter, UserId};
