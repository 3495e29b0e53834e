//! Span names shared by the solver crates.

pub mod names {
    pub const SOLVE: &str = "gridworld.solve";
    pub const POLICY_ITERATION: &str = "gridworld.policy_iteration";
    pub const SCENARIO: &str = "gridworld.scenario";
}
