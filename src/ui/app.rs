use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::config::Config;
use crate::store::worker::{StoreCommand, StoreEvent};
use crate::store::{NewIngredient, FAILURE_MESSAGE};
use crate::ui::ingredients::{IngredientListState, IngredientsIntent, IngredientsReducer};
use crate::ui::mvi::Reducer;
use crate::ui::request::{RequestIntent, RequestLifecycleState, RequestReducer};
use crate::ui::text_field::TextField;

/// Edits settle for this long before a search query goes out.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Title,
    Amount,
    Search,
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Amount,
            Focus::Amount => Focus::Search,
            Focus::Search => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Title => Focus::List,
            Focus::Amount => Focus::Title,
            Focus::Search => Focus::Amount,
            Focus::List => Focus::Search,
        }
    }
}

pub type StoreSender = mpsc::Sender<StoreCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Ingredient collection (MVI pattern).
    ingredients: IngredientListState,
    /// Add/remove request lifecycle (MVI pattern).
    request: RequestLifecycleState,
    title_field: TextField,
    amount_field: TextField,
    search_field: TextField,
    /// Selected row in the ingredient list.
    selection: usize,
    /// Inline validation message under the form.
    form_hint: Option<&'static str>,
    store_tx: Option<StoreSender>,
    /// Token of the most recently issued add/remove request. Lifecycle
    /// completions carrying any other token are stale and ignored; list
    /// completions are applied regardless, since the store did perform
    /// the operation.
    current_request: Option<Uuid>,
    /// Set on every search edit, taken once the debounce window passes.
    search_edited_at: Option<Instant>,
    tick: usize,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Title,
            ingredients: IngredientListState::default(),
            request: RequestLifecycleState::default(),
            title_field: TextField::default(),
            amount_field: TextField::default(),
            search_field: TextField::default(),
            selection: 0,
            form_hint: None,
            store_tx: None,
            current_request: None,
            search_edited_at: None,
            tick: 0,
            config,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn ingredients(&self) -> &IngredientListState {
        &self.ingredients
    }

    pub fn request(&self) -> &RequestLifecycleState {
        &self.request
    }

    pub fn has_error(&self) -> bool {
        self.request.has_error()
    }

    pub fn title_field(&self) -> &TextField {
        &self.title_field
    }

    pub fn amount_field(&self) -> &TextField {
        &self.amount_field
    }

    pub fn search_field(&self) -> &TextField {
        &self.search_field
    }

    pub fn form_hint(&self) -> Option<&'static str> {
        self.form_hint
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn set_store_sender(&mut self, sender: StoreSender) {
        self.store_tx = Some(sender);
    }

    /// Fetch the full ingredient list. Called once at startup.
    pub fn request_initial_load(&mut self) {
        let _ = self.send_store(StoreCommand::Query { filter: None });
    }

    // ========================================================================
    // Text editing (routed to whichever field has focus)
    // ========================================================================

    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focused_field_mut() else {
            return;
        };
        field.insert(c);
        self.after_edit();
    }

    pub fn paste(&mut self, text: &str) {
        let Some(field) = self.focused_field_mut() else {
            return;
        };
        field.insert_str(text);
        self.after_edit();
    }

    pub fn delete_back(&mut self) {
        let Some(field) = self.focused_field_mut() else {
            return;
        };
        field.delete_back();
        self.after_edit();
    }

    pub fn delete_forward(&mut self) {
        let Some(field) = self.focused_field_mut() else {
            return;
        };
        field.delete_forward();
        self.after_edit();
    }

    pub fn cursor_left(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.move_left();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.move_right();
        }
    }

    pub fn cursor_home(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.move_home();
        }
    }

    pub fn cursor_end(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.move_end();
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::Title => Some(&mut self.title_field),
            Focus::Amount => Some(&mut self.amount_field),
            Focus::Search => Some(&mut self.search_field),
            Focus::List => None,
        }
    }

    fn after_edit(&mut self) {
        match self.focus {
            Focus::Search => self.search_edited_at = Some(Instant::now()),
            Focus::Title | Focus::Amount => self.form_hint = None,
            Focus::List => {}
        }
    }

    // ========================================================================
    // List selection
    // ========================================================================

    pub fn select_previous(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selection + 1 < self.ingredients.len() {
            self.selection += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let last = self.ingredients.len().saturating_sub(1);
        if self.selection > last {
            self.selection = last;
        }
    }

    // ========================================================================
    // User intents
    // ========================================================================

    /// Validate the form and issue a create request.
    ///
    /// The fields clear immediately on submission; the new entry appears
    /// in the list once the store confirms it with an id.
    pub fn submit_form(&mut self) {
        let title = self.title_field.text().trim().to_string();
        if title.is_empty() {
            self.form_hint = Some("Title must not be empty");
            return;
        }
        let amount: f64 = match self.amount_field.text().trim().parse() {
            Ok(value) => value,
            Err(_) => {
                self.form_hint = Some("Amount must be a number");
                return;
            }
        };

        self.form_hint = None;
        let token = Uuid::new_v4();
        self.dispatch_request(RequestIntent::Send);
        if self.send_store(StoreCommand::Create {
            token,
            draft: NewIngredient { title, amount },
        }) {
            self.current_request = Some(token);
            self.title_field.clear();
            self.amount_field.clear();
        } else {
            self.dispatch_request(RequestIntent::Error {
                message: FAILURE_MESSAGE.to_string(),
            });
        }
    }

    /// Issue a delete request for the selected list entry.
    ///
    /// The entry stays in the list until the store confirms the delete;
    /// if the request fails, the list is untouched and the error modal
    /// opens instead.
    pub fn remove_selected(&mut self) {
        let Some(ingredient) = self.ingredients.get(self.selection) else {
            return;
        };
        let id = ingredient.id.clone();

        let token = Uuid::new_v4();
        self.dispatch_request(RequestIntent::Send);
        if self.send_store(StoreCommand::Delete { token, id }) {
            self.current_request = Some(token);
        } else {
            self.dispatch_request(RequestIntent::Error {
                message: FAILURE_MESSAGE.to_string(),
            });
        }
    }

    /// Dismiss the error modal.
    pub fn clear_error(&mut self) {
        self.dispatch_request(RequestIntent::Clear);
    }

    // ========================================================================
    // Clock
    // ========================================================================

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        // A settled search edit fires exactly one query. Any further
        // keystroke restarts the window before this triggers.
        if let Some(edited_at) = self.search_edited_at {
            if edited_at.elapsed() >= SEARCH_DEBOUNCE {
                self.search_edited_at = None;
                self.issue_search();
            }
        }
    }

    fn issue_search(&mut self) {
        let text = self.search_field.text();
        let filter = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        let _ = self.send_store(StoreCommand::Query { filter });
    }

    // ========================================================================
    // Store completions
    // ========================================================================

    pub fn on_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Created { token, ingredient } => {
                if self.take_if_current(token) {
                    self.dispatch_request(RequestIntent::Response);
                }
                self.dispatch_ingredients(IngredientsIntent::Add { ingredient });
            }
            StoreEvent::CreateFailed { token, message } => {
                if self.take_if_current(token) {
                    self.dispatch_request(RequestIntent::Error { message });
                }
            }
            StoreEvent::Deleted { token, id } => {
                if self.take_if_current(token) {
                    self.dispatch_request(RequestIntent::Response);
                }
                self.dispatch_ingredients(IngredientsIntent::Delete { id });
                self.clamp_selection();
            }
            StoreEvent::DeleteFailed { token, message } => {
                if self.take_if_current(token) {
                    self.dispatch_request(RequestIntent::Error { message });
                }
            }
            StoreEvent::Loaded { ingredients } => {
                self.dispatch_ingredients(IngredientsIntent::Set { ingredients });
                self.clamp_selection();
            }
        }
    }

    /// True when this token belongs to the most recent request, in which
    /// case the slot is cleared. Stale tokens leave the slot alone.
    fn take_if_current(&mut self, token: Uuid) -> bool {
        if self.current_request == Some(token) {
            self.current_request = None;
            true
        } else {
            false
        }
    }

    fn send_store(&mut self, command: StoreCommand) -> bool {
        let Some(sender) = &self.store_tx else {
            return false;
        };
        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Store command channel send failed");
                false
            }
        }
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    fn dispatch_ingredients(&mut self, intent: IngredientsIntent) {
        dispatch_mvi!(self, ingredients, IngredientsReducer, intent);
    }

    fn dispatch_request(&mut self, intent: RequestIntent) {
        dispatch_mvi!(self, request, RequestReducer, intent);
    }
}
