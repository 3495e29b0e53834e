/// Discount factor used by the classic exercise.
pub const DEFAULT_DISCOUNT: f64 = 0.9;

/// Per-cell convergence threshold used by the classic exercise.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Probability that the agent moves in the intended direction.
pub const DEFAULT_INTENDED_PROBABILITY: f64 = 0.8;

/// Probability of slipping to each perpendicular direction.
pub const DEFAULT_SLIP_PROBABILITY: f64 = 0.1;

/// Allowed deviation of a transition triple from 1.0.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;

/// A greedy action must beat the incumbent by more than this to replace it
/// during policy improvement. Keeps tied actions from flip-flopping.
pub const POLICY_IMPROVEMENT_MARGIN: f64 = 1e-12;

/// Classic grid height (rows).
pub const DEFAULT_GRID_HEIGHT: usize = 4;

/// Classic grid width (columns).
pub const DEFAULT_GRID_WIDTH: usize = 5;

/// Base rewards swept by the classic exercise.
pub const DEFAULT_REWARD_SCENARIOS: [f64; 4] = [-2.0, 0.1, 0.02, 1.0];
