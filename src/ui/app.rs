use crate::dispatch_mvi;
use crate::effects::{EffectCoordinator, ItemIntent};
use crate::model::ItemId;
use crate::router::{Navigator, Route};
use crate::store::{ActionKind, ItemState, ItemStore};
use crate::ui::form::{FormIntent, FormMode, FormReducer, FormState};

/// Interactive application state: the current screen, the item store and
/// the per-screen UI state around it.
pub struct App {
    should_quit: bool,
    navigator: Navigator,
    store: ItemStore,
    effects: EffectCoordinator,
    /// Create/edit buffer (MVI pattern).
    form: FormState,
    selection: usize,
    confirm_delete: Option<ItemId>,
    /// Message carried into the list screen, shown until the next move.
    flash: Option<String>,
    /// Create or update submitted from the form, awaiting its outcome.
    pending_submit: Option<ActionKind>,
    base_url: String,
    tick: u64,
}

impl App {
    /// Build the app and enter `start`, which fires that screen's fetch.
    pub fn new(
        store: ItemStore,
        effects: EffectCoordinator,
        start: Route,
        base_url: impl Into<String>,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            navigator: Navigator::new(start),
            store,
            effects,
            form: FormState::default(),
            selection: 0,
            confirm_delete: None,
            flash: None,
            pending_submit: None,
            base_url: base_url.into(),
            tick: 0,
        };
        app.enter_route();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn state(&self) -> &ItemState {
        self.store.state()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Item awaiting delete confirmation, if the dialog is open.
    pub fn confirm_delete(&self) -> Option<ItemId> {
        self.confirm_delete
    }

    pub fn is_busy(&self) -> bool {
        self.store.state().last_action_loading
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.sync();
    }

    /// Apply queued store actions and react to finished requests.
    pub fn sync(&mut self) {
        if self.store.pump() == 0 {
            return;
        }

        let len = self.store.state().items.len();
        self.selection = self.selection.min(len.saturating_sub(1));

        self.prefill_edit_form();
        self.finish_submit();
    }

    pub fn navigate(&mut self, route: Route) {
        self.navigator.navigate(route);
        self.enter_route();
    }

    pub fn navigate_with_message(&mut self, route: Route, message: impl Into<String>) {
        self.navigator.navigate_with_message(route, message);
        self.enter_route();
    }

    /// Previous screen, or the list when there is no history.
    pub fn back(&mut self) {
        if self.navigator.back() {
            self.enter_route();
        } else if self.route() != Route::List {
            self.navigate(Route::List);
        }
    }

    /// Re-run the current screen's fetch.
    pub fn refresh(&mut self) {
        match self.route() {
            Route::List => self.dispatch(ItemIntent::Fetch),
            Route::Show(id) => self.dispatch(ItemIntent::GetOne(id)),
            Route::Create | Route::Edit(_) => {}
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.store.state().items.len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let next = (self.selection as isize + delta).rem_euclid(len as isize);
        self.selection = next as usize;
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.store.state().items.get(self.selection).map(|item| item.id)
    }

    pub fn show_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.navigate(Route::Show(id));
        }
    }

    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.navigate(Route::Edit(id));
        }
    }

    pub fn request_delete_selected(&mut self) {
        self.confirm_delete = self.selected_id();
    }

    pub fn confirm_delete_accept(&mut self) {
        if let Some(id) = self.confirm_delete.take() {
            self.flash = None;
            self.dispatch(ItemIntent::Delete(id));
        }
    }

    pub fn confirm_delete_cancel(&mut self) {
        self.confirm_delete = None;
    }

    pub fn form_input(&mut self, intent: FormIntent) {
        if self.pending_submit.is_none() {
            dispatch_mvi!(self, form, FormReducer, intent);
        }
    }

    /// Submit the form.
    ///
    /// Create sends the full payload. Edit sends only the changed fields,
    /// and goes straight back to the list when nothing changed.
    pub fn submit_form(&mut self) {
        if self.pending_submit.is_some() || !self.form.is_loaded() {
            return;
        }
        if self.form.name.trim().is_empty() {
            dispatch_mvi!(
                self,
                form,
                FormReducer,
                FormIntent::Invalid("Name is required".to_string())
            );
            return;
        }

        match self.form.mode {
            FormMode::Create => {
                if let Some(item) = self.form.new_item() {
                    self.pending_submit = Some(ActionKind::Create);
                    self.dispatch(ItemIntent::Add(item));
                }
            }
            FormMode::Edit(id) => match self.form.patch() {
                Some(patch) => {
                    self.pending_submit = Some(ActionKind::Update);
                    self.dispatch(ItemIntent::Update { id, patch });
                }
                None => {
                    tracing::debug!(id, "No changes; skipping update");
                    self.navigate(Route::List);
                }
            },
        }
    }

    pub fn cancel_form(&mut self) {
        self.navigate(Route::List);
    }

    fn dispatch(&mut self, intent: ItemIntent) {
        // Detached: the outcome arrives through the store channel.
        drop(self.effects.dispatch(intent));
        self.sync();
    }

    fn enter_route(&mut self) {
        self.flash = None;
        self.confirm_delete = None;
        self.pending_submit = None;

        match self.route() {
            Route::List => {
                self.flash = self.navigator.take_flash();
                self.dispatch(ItemIntent::Fetch);
            }
            Route::Create => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::Reset(FormMode::Create));
            }
            Route::Show(id) => self.dispatch(ItemIntent::GetOne(id)),
            Route::Edit(id) => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::Reset(FormMode::Edit(id)));
                self.dispatch(ItemIntent::GetOne(id));
            }
        }
    }

    fn prefill_edit_form(&mut self) {
        let Route::Edit(id) = self.route() else {
            return;
        };
        if self.form.is_loaded() || self.store.state().is_loading(ActionKind::GetOne) {
            return;
        }
        let fields = match &self.store.state().selected_item {
            Some(item) if item.id == id => item.fields(),
            _ => return,
        };
        dispatch_mvi!(self, form, FormReducer, FormIntent::Load(fields));
    }

    fn finish_submit(&mut self) {
        let Some(kind) = self.pending_submit else {
            return;
        };
        let state = self.store.state();
        if state.last_action != Some(kind) {
            // Another request took over the slot.
            self.pending_submit = None;
            return;
        }
        if state.last_action_loading {
            return;
        }

        self.pending_submit = None;
        if let Some(message) = state.success_for(kind).map(str::to_string) {
            self.navigate_with_message(Route::List, message);
        }
    }
}
