mod item;

pub use item::{
    add_item, delete_item, fetch_items, get_item, update_item, ItemApi, RestItemApi,
};
