use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormField, FormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Reset(mode) => FormState {
                mode,
                ..FormState::default()
            },
            FormIntent::Load(fields) => FormState {
                mode: state.mode,
                name: fields.name.clone().unwrap_or_default(),
                description: fields.description.clone().unwrap_or_default(),
                original: Some(fields),
                ..FormState::default()
            },
            FormIntent::Input(ch) => {
                match state.focus {
                    FormField::Name => state.name.push(ch),
                    FormField::Description => state.description.push(ch),
                }
                state.error = None;
                state
            }
            FormIntent::Backspace => {
                match state.focus {
                    FormField::Name => state.name.pop(),
                    FormField::Description => state.description.pop(),
                };
                state.error = None;
                state
            }
            FormIntent::NextField => {
                state.focus = state.focus.next();
                state
            }
            FormIntent::Invalid(message) => {
                state.error = Some(message);
                state
            }
        }
    }
}
