//! View routing: which top-level screen is active.
//!
//! The [`Router`] tracks the current page, an optional pending filter
//! payload, and an optional selected vehicle. It holds no business logic;
//! the presentation layer asks [`Router::active_screen`] what to display and
//! pushes navigation intents back in.
//!
//! # Transition rules
//!
//! - Selecting a vehicle always shows the detail screen, regardless of which
//!   page was last selected, until explicitly returned from.
//! - Returning from the detail screen clears the selection and lands on the
//!   catalog.
//! - A successful login lands on the admin page.
//! - Navigating anywhere clears the selection.

use crate::catalog::FilterSpec;

/// Top-level page identifiers.
///
/// String round-trips use the page keys the presentation layer navigates
/// with; an unknown key resolves to [`Page::Home`], matching the catch-all
/// behavior of the page switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Catalog,
    Favorites,
    Contact,
    About,
    Login,
    Admin,
}

impl Page {
    /// The navigation key for this page.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::Favorites => "favorites",
            Self::Contact => "contact",
            Self::About => "about",
            Self::Login => "login",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Page {
    type Err = std::convert::Infallible;

    /// Parses a navigation key; anything unrecognized resolves to `Home`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "catalog" => Self::Catalog,
            "favorites" => Self::Favorites,
            "contact" => Self::Contact,
            "about" => Self::About,
            "login" => Self::Login,
            "admin" => Self::Admin,
            _ => Self::Home,
        })
    }
}

/// What the presentation layer should currently display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// A regular top-level page.
    Page(Page),
    /// The vehicle detail screen, overriding the page while a vehicle is
    /// selected. Carries the selected identifier (a weak reference: the
    /// vehicle may have been deleted since selection).
    VehicleDetails(String),
}

/// Screen routing state machine.
///
/// # Examples
///
/// ```
/// use forecourt::app::{Page, Router, Screen};
///
/// let mut router = Router::new();
/// router.select_vehicle("1001");
/// assert_eq!(router.active_screen(), Screen::VehicleDetails("1001".to_string()));
///
/// router.back_to_catalog();
/// assert_eq!(router.active_screen(), Screen::Page(Page::Catalog));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Page,
    pending_filters: Option<FilterSpec>,
    selected_vehicle: Option<String>,
}

impl Router {
    /// Creates a router sitting on the home page with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last selected page, ignoring any vehicle-detail override.
    #[must_use]
    pub fn current_page(&self) -> Page {
        self.current
    }

    /// What should be on screen right now.
    ///
    /// A selected vehicle overrides the page until the selection is cleared.
    #[must_use]
    pub fn active_screen(&self) -> Screen {
        match &self.selected_vehicle {
            Some(id) => Screen::VehicleDetails(id.clone()),
            None => Screen::Page(self.current),
        }
    }

    /// Switches to a page, clearing any vehicle selection.
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(page = page.as_str(), "navigating");
        self.current = page;
        self.selected_vehicle = None;
    }

    /// Switches to a page carrying a filter payload for the catalog screen.
    ///
    /// Used by the quick-search flow to jump straight into a pre-filtered
    /// catalog. The payload replaces any previous pending filters and stays
    /// put until [`take_pending_filters`](Self::take_pending_filters) claims it.
    pub fn navigate_with_filters(&mut self, page: Page, filters: FilterSpec) {
        tracing::debug!(page = page.as_str(), "navigating with filter payload");
        self.current = page;
        self.selected_vehicle = None;
        self.pending_filters = Some(filters);
    }

    /// Drills into a single vehicle's detail screen.
    pub fn select_vehicle(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(vehicle_id = %id, "vehicle selected");
        self.selected_vehicle = Some(id);
    }

    /// Returns from the detail screen: clears the selection, lands on catalog.
    pub fn back_to_catalog(&mut self) {
        tracing::debug!("returning to catalog");
        self.selected_vehicle = None;
        self.current = Page::Catalog;
    }

    /// Moves to the admin page after a successful login.
    pub fn on_login_success(&mut self) {
        self.navigate(Page::Admin);
    }

    /// Claims the pending filter payload, if any.
    ///
    /// The catalog screen calls this once when it mounts; subsequent calls
    /// return `None` until another quick-search navigation sets a payload.
    #[must_use]
    pub fn take_pending_filters(&mut self) -> Option<FilterSpec> {
        self.pending_filters.take()
    }

    /// The currently selected vehicle identifier, if any.
    #[must_use]
    pub fn selected_vehicle(&self) -> Option<&str> {
        self.selected_vehicle.as_deref()
    }

    /// Whether the shared header/footer chrome should be shown.
    ///
    /// Hidden on the login page and while a vehicle detail screen is up.
    #[must_use]
    pub fn chrome_visible(&self) -> bool {
        self.current != Page::Login && self.selected_vehicle.is_none()
    }
}
