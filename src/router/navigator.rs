use super::route::Route;

/// Route history plus a message handed to the next screen.
///
/// The flash is one-shot: the destination takes it once and it is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
    back_stack: Vec<Route>,
    flash: Option<String>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            back_stack: Vec::new(),
            flash: None,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.current, to = %route, "Navigate");
        let previous = std::mem::replace(&mut self.current, route);
        self.back_stack.push(previous);
    }

    /// Navigate and carry `message` to the destination.
    pub fn navigate_with_message(&mut self, route: Route, message: impl Into<String>) {
        self.flash = Some(message.into());
        self.navigate(route);
    }

    /// Return to the previous route. Returns false at the root of history.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                tracing::debug!(from = %self.current, to = %previous, "Navigate back");
                self.current = previous;
                self.flash = None;
                true
            }
            None => false,
        }
    }

    /// Take the pending message. A second call returns `None`.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }

    pub fn peek_flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_and_back() {
        let mut nav = Navigator::default();
        nav.navigate(Route::Show(3));
        nav.navigate(Route::Edit(3));
        assert_eq!(nav.current(), Route::Edit(3));
        assert!(nav.back());
        assert_eq!(nav.current(), Route::Show(3));
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.current(), Route::List);
    }

    #[test]
    fn flash_is_taken_once() {
        let mut nav = Navigator::new(Route::Create);
        nav.navigate_with_message(Route::List, "Item successfully added!");
        assert_eq!(nav.peek_flash(), Some("Item successfully added!"));
        assert_eq!(nav.take_flash().as_deref(), Some("Item successfully added!"));
        assert_eq!(nav.take_flash(), None);
    }
}
