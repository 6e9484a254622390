pub mod error;
pub use error::{AppError, AppResult};

pub mod config;

pub mod logging;
pub use logging::Logger;

pub mod catalog {
    pub mod predator;
    pub use predator::{Coordinate, HabitatType, MovieScene, Predator, PredatorId};

    pub mod filter;
    pub use filter::{FilterOption, SortMode};

    pub mod loader;
    pub use loader::LoadError;

    pub mod store;
    pub use store::{CatalogQuery, CatalogStore};
}

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::Controller;
}

pub mod model {
    pub mod app_state;
    pub use app_state::AppState;

    pub mod ui_state;
    pub use ui_state::{Notification, NotificationLevel, UIMode, UIOverlay, UIState};
}

pub mod view {
    pub mod icons;

    pub mod theme;

    pub mod ui;
    pub use ui::View;

    pub mod components {
        pub mod confirm_delete;
        pub mod detail_view;
        pub mod filter_menu;
        pub mod help_overlay;
        pub mod notification_overlay;
        pub mod predator_table;
        pub mod search_overlay;
        pub mod status_bar;
    }
}
