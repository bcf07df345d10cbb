//! drivethru 固有のドメイン型（型と不変条件）

pub mod command;
pub mod history;
pub mod menu;
pub mod order;
pub mod reply;

pub use command::ReplCommand;
pub use history::History;
pub use menu::Menu;
pub use order::{Order, OrderError};
pub use reply::ModelReply;
