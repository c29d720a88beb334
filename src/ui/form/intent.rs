use crate::model::ItemFields;
use crate::mvi::Intent;

use super::state::FormMode;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Start over with an empty form.
    Reset(FormMode),
    /// Fill the form with an item's current values.
    Load(ItemFields),
    Input(char),
    Backspace,
    /// Move focus to the other field.
    NextField,
    /// Submission was rejected locally.
    Invalid(String),
}

impl Intent for FormIntent {}
