pub mod attendance;
pub mod overview;
pub mod payment;
pub mod profile;
pub mod purchase_plan;
pub mod schedule;

pub use attendance::AttendancePage;
pub use overview::MemberOverviewPage;
pub use payment::PaymentGatewayPage;
pub use profile::ProfilePage;
pub use purchase_plan::PurchasePlanPage;
pub use schedule::ClassSchedulePage;
