pub mod budget_policy;
pub mod viewport_history;
