pub mod item;
pub mod reply;

pub use item::render_item;
pub use reply::{compose_reply, render_disclaimer, sanitize_item_name, ReplyStyle, ITEM_SEPARATOR};
