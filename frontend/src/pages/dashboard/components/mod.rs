pub mod quick_actions;
pub mod summary;

pub use quick_actions::QuickActions;
pub use summary::SummaryCards;
