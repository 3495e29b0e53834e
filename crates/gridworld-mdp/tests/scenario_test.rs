use gridworld_core::config::{GridworldConfig, SolveMethod};
use gridworld_core::constants::DEFAULT_REWARD_SCENARIOS;
use gridworld_core::errors::SolverError;
use gridworld_core::types::Coord;
use gridworld_mdp::{run_scenario, run_scenarios, ValueIteration};

#[test]
fn default_sweep_solves_every_reward_in_order() {
    let config = GridworldConfig::default();
    let reports = run_scenarios(&config, &DEFAULT_REWARD_SCENARIOS).unwrap();

    assert_eq!(reports.len(), 4);
    let solver = ValueIteration::from_config(&config).unwrap();
    for (report, reward) in reports.iter().zip(DEFAULT_REWARD_SCENARIOS) {
        assert_eq!(report.base_reward, reward);
        assert_eq!(report.method, SolveMethod::Value);
        assert!(solver.residual(&report.grid, &report.solution.values).unwrap() <= 1e-4);
        assert_eq!(report.solution.values.get(Coord::new(1, 4)), 1.0);
    }
}

#[test]
fn scenarios_are_independent() {
    let config = GridworldConfig::default();
    let alone = run_scenario(&config, 0.02).unwrap();
    let swept = run_scenarios(&config, &[-2.0, 0.02]).unwrap();
    assert_eq!(alone.solution, swept[1].solution);
}

#[test]
fn policy_method_is_selected_from_config() {
    let mut config = GridworldConfig::default();
    config.solver.method = Some(SolveMethod::Policy);
    let report = run_scenario(&config, -2.0).unwrap();
    assert_eq!(report.method, SolveMethod::Policy);
    assert!(report.policy.get(Coord::new(0, 0)).is_some());
}

#[test]
fn custom_layout_from_config() {
    let config = GridworldConfig::from_toml(
        r#"
[grid]
height = 1
width = 4
obstacles = []

[[grid.terminals]]
row = 0
col = 3
reward = 10.0
"#,
    )
    .unwrap();
    let report = run_scenario(&config, -1.0).unwrap();
    let values = &report.solution.values;
    assert_eq!(values.width(), 4);
    assert_eq!(values.get(Coord::new(0, 3)), 10.0);
    assert!(values.get(Coord::new(0, 2)) > values.get(Coord::new(0, 0)));
}

#[test]
fn invalid_config_fails_before_iterating() {
    let mut config = GridworldConfig::default();
    config.solver.discount = Some(1.0);
    let err = run_scenario(&config, -2.0).unwrap_err();
    assert!(matches!(err, SolverError::Config(_)));

    let mut config = GridworldConfig::default();
    config.grid.obstacles = Some(vec![[9, 9]]);
    assert!(matches!(
        run_scenario(&config, -2.0),
        Err(SolverError::Config(_))
    ));
}

#[test]
fn non_finite_base_reward_is_a_grid_error() {
    let err = run_scenario(&GridworldConfig::default(), f64::NAN).unwrap_err();
    assert!(matches!(err, SolverError::Grid(_)));
}
