pub mod dashboard;
pub mod equipment;
pub mod facilities;
pub mod pending_requests;
pub mod reports;
pub mod scheduler;

pub use dashboard::AdminDashboardPage;
