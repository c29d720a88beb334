use std::fmt;

use crate::model::ItemId;

/// A screen of the application, addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/create`
    Create,
    /// `/:id`
    Show(ItemId),
    /// `/:id/edit`
    Edit(ItemId),
}

impl Route {
    /// Parse a navigation path. Trailing slashes are ignored; anything
    /// unrecognised yields `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.split('/');

        match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => Some(Route::List),
            (Some("create"), None, None) => Some(Route::Create),
            (Some(id), None, None) => id.parse().ok().map(Route::Show),
            (Some(id), Some("edit"), None) => id.parse().ok().map(Route::Edit),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Create => "/create".to_string(),
            Route::Show(id) => format!("/{}", id),
            Route::Edit(id) => format!("/{}/edit", id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::List => "Items",
            Route::Create => "Create Item",
            Route::Show(_) => "Item Details",
            Route::Edit(_) => "Edit Item",
        }
    }

    /// The item this route is about, if any.
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Route::Show(id) | Route::Edit(id) => Some(*id),
            Route::List | Route::Create => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_paths() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse(""), Some(Route::List));
        assert_eq!(Route::parse("/create"), Some(Route::Create));
        assert_eq!(Route::parse("/42"), Some(Route::Show(42)));
        assert_eq!(Route::parse("/42/edit"), Some(Route::Edit(42)));
        assert_eq!(Route::parse("/42/edit/"), Some(Route::Edit(42)));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/abc"), None);
        assert_eq!(Route::parse("/42/delete"), None);
        assert_eq!(Route::parse("/create/edit"), None);
        assert_eq!(Route::parse("/1/edit/x"), None);
        assert_eq!(Route::parse("/-1"), None);
    }

    #[test]
    fn path_parses_back() {
        for route in [Route::List, Route::Create, Route::Show(7), Route::Edit(7)] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
