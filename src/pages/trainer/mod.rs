pub mod overview;

pub use overview::TrainerOverviewPage;
