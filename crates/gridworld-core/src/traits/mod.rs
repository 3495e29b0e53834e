pub mod solver;

pub use solver::MdpSolver;
