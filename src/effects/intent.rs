use crate::model::{ItemId, ItemPatch, NewItem};
use crate::mvi::Intent;
use crate::store::ActionKind;

/// Requests the views can raise against the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemIntent {
    Fetch,
    GetOne(ItemId),
    Add(NewItem),
    Update { id: ItemId, patch: ItemPatch },
    Delete(ItemId),
}

impl ItemIntent {
    /// The lifecycle slot this intent drives.
    pub fn kind(&self) -> ActionKind {
        match self {
            ItemIntent::Fetch => ActionKind::List,
            ItemIntent::GetOne(_) => ActionKind::GetOne,
            ItemIntent::Add(_) => ActionKind::Create,
            ItemIntent::Update { .. } => ActionKind::Update,
            ItemIntent::Delete(_) => ActionKind::Delete,
        }
    }
}

impl Intent for ItemIntent {}
