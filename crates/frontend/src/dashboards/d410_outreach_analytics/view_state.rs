//! Tab selector of the outreach dashboard.
//!
//! Three views, switched only by the user. Every transition is allowed and
//! there is no terminal view.

/// Views of the outreach dashboard.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum DashboardView {
    #[default]
    Overview,
    Locations,
    Trends,
}

impl DashboardView {
    /// All views in navigation order.
    pub const ALL: [DashboardView; 3] = [
        DashboardView::Overview,
        DashboardView::Locations,
        DashboardView::Trends,
    ];

    /// Stable id, used as the tab value.
    pub fn id(&self) -> &'static str {
        match self {
            DashboardView::Overview => "overview",
            DashboardView::Locations => "locations",
            DashboardView::Trends => "trends",
        }
    }

    /// Returns the display name for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Overview",
            DashboardView::Locations => "Locations",
            DashboardView::Trends => "Trends",
        }
    }

    /// Icon name for `shared::icons::icon`.
    pub fn icon(&self) -> &'static str {
        match self {
            DashboardView::Overview => "activity",
            DashboardView::Locations => "map-pin",
            DashboardView::Trends => "trending-up",
        }
    }

    /// Parse a view from its id. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.id() == id)
    }
}
