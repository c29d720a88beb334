mod diff;
mod item;

pub use diff::{changed_fields, extract_changed_fields};
pub use item::{Item, ItemFields, ItemId, ItemPatch, NewItem};
