//! Unidirectional state updates shared by the item store and the form.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Something that happened: a key press, a request starting, a response.
pub trait Intent: Send + 'static {}

/// A snapshot a view renders from. Replaced whole on every transition.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// The single place a state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure transition, no I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run a reducer over a state field in place.
#[macro_export]
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}
