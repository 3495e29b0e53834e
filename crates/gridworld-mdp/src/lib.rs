//! # gridworld-mdp
//!
//! Dynamic-programming solvers for stochastic grid worlds:
//! value iteration, policy iteration, greedy policy extraction, and the
//! reward-scenario sweep built on top of them.

pub mod bellman;
pub mod policy;
pub mod policy_iteration;
pub mod scenario;
pub mod transition;
pub mod value_iteration;

pub use policy::greedy_policy;
pub use policy_iteration::{PolicyIteration, PolicyIterationOutcome};
pub use scenario::{run_scenario, run_scenarios, ScenarioReport};
pub use transition::TransitionModel;
pub use value_iteration::ValueIteration;
