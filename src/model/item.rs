use serde::{Deserialize, Serialize};

/// Backend-assigned item identifier.
pub type ItemId = u64;

/// The item entity as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub created_by: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Soft-deletion marker. Carried through, never acted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl Item {
    /// The editable projection of this item.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: Some(self.name.clone()),
            description: self.description.clone(),
        }
    }
}

/// Create payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update payload. Only the fields that are `Some` go over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Name and description as edited in a form.
///
/// `None` means the field is absent from the edited value, which the diff
/// treats as "not touched".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemFields {
    /// Fields of `self` that differ from `original`, or `None` when nothing
    /// changed.
    pub fn changes_from(&self, original: &ItemFields) -> Option<ItemPatch> {
        let patch = ItemPatch {
            name: changed(&original.name, &self.name),
            description: changed(&original.description, &self.description),
        };
        (!patch.is_empty()).then_some(patch)
    }

    /// Build a create payload. Returns `None` if the name is missing or blank.
    pub fn into_new_item(self) -> Option<NewItem> {
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        Some(NewItem {
            name,
            description: self.description,
        })
    }
}

fn changed(original: &Option<String>, edited: &Option<String>) -> Option<String> {
    match edited {
        Some(value) if original.as_ref() != Some(value) => Some(value.clone()),
        _ => None,
    }
}
