use crate::model::{ItemFields, ItemId, ItemPatch, NewItem};
use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Name,
        }
    }
}

/// Edit buffer behind the create and edit screens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub name: String,
    pub description: String,
    pub focus: FormField,
    /// Values the edit form was loaded with. `None` until loaded.
    pub original: Option<ItemFields>,
    /// Local validation message.
    pub error: Option<String>,
}

impl UiState for FormState {}

impl FormState {
    /// Create forms are always ready; edit forms once the item is loaded.
    pub fn is_loaded(&self) -> bool {
        match self.mode {
            FormMode::Create => true,
            FormMode::Edit(_) => self.original.is_some(),
        }
    }

    /// The edited values.
    ///
    /// An empty description counts as absent unless the original had one,
    /// in which case it is sent as an empty string to clear it.
    pub fn fields(&self) -> ItemFields {
        let had_description = self
            .original
            .as_ref()
            .is_some_and(|original| original.description.is_some());
        let description = if self.description.is_empty() && !had_description {
            None
        } else {
            Some(self.description.clone())
        };
        ItemFields {
            name: Some(self.name.clone()),
            description,
        }
    }

    pub fn new_item(&self) -> Option<NewItem> {
        self.fields().into_new_item()
    }

    /// Changed fields against the loaded values; `None` if nothing changed.
    pub fn patch(&self) -> Option<ItemPatch> {
        let original = self.original.clone().unwrap_or_default();
        self.fields().changes_from(&original)
    }

    pub fn focused_value(&self) -> &str {
        match self.focus {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
        }
    }
}
