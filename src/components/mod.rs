//! Reusable UI components

pub mod footer;
pub mod header;
pub mod layout;
pub mod loading;
pub mod protected_route;
pub mod stat_card;

pub use footer::Footer;
pub use header::Header;
pub use layout::DashboardLayout;
pub use loading::{LoadingPanel, LoadingSpinner};
pub use protected_route::ProtectedRoute;
pub use stat_card::StatCard;
