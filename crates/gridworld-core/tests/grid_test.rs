use gridworld_core::errors::GridError;
use gridworld_core::types::*;

#[test]
fn classic_grid_places_obstacles_and_terminals() {
    let grid = Grid::classic(-2.0).unwrap();
    assert_eq!((grid.height(), grid.width()), (4, 5));
    assert_eq!(grid.cell(Coord::new(1, 1)), Cell::Obstacle);
    assert_eq!(grid.cell(Coord::new(2, 2)), Cell::Obstacle);
    assert_eq!(grid.cell(Coord::new(1, 4)), Cell::Terminal(1.0));
    assert_eq!(grid.cell(Coord::new(2, 3)), Cell::Terminal(-1.0));
    assert_eq!(grid.cell(Coord::new(0, 0)), Cell::Normal(-2.0));
    assert_eq!(grid.cell(Coord::new(3, 4)), Cell::Normal(-2.0));
}

#[test]
fn base_reward_does_not_touch_special_cells() {
    let grid = Grid::classic(7.5).unwrap();
    assert_eq!(grid.cell(Coord::new(1, 4)).reward(), Some(1.0));
    assert_eq!(grid.cell(Coord::new(2, 3)).reward(), Some(-1.0));
    assert_eq!(grid.cell(Coord::new(1, 1)).reward(), None);
}

#[test]
fn coords_iterate_row_major() {
    let grid = Grid::from_layout(&GridLayout::open(2, 3), 0.0).unwrap();
    let coords: Vec<Coord> = grid.coords().collect();
    assert_eq!(coords.len(), 6);
    assert_eq!(coords[0], Coord::new(0, 0));
    assert_eq!(coords[2], Coord::new(0, 2));
    assert_eq!(coords[3], Coord::new(1, 0));
}

#[test]
fn get_returns_none_outside_grid() {
    let grid = Grid::classic(0.0).unwrap();
    assert!(grid.get(Coord::new(4, 0)).is_none());
    assert!(grid.get(Coord::new(0, 5)).is_none());
    assert_eq!(grid.get(Coord::new(1, 1)), Some(Cell::Obstacle));
}

// ── Movement ─────────────────────────────────────────────────────────────

#[test]
fn step_clamps_at_outer_walls() {
    let grid = Grid::classic(0.0).unwrap();
    assert_eq!(grid.step(Coord::new(0, 0), Action::Up), Coord::new(0, 0));
    assert_eq!(grid.step(Coord::new(0, 0), Action::Left), Coord::new(0, 0));
    assert_eq!(grid.step(Coord::new(3, 4), Action::Down), Coord::new(3, 4));
    assert_eq!(grid.step(Coord::new(3, 4), Action::Right), Coord::new(3, 4));
}

#[test]
fn step_moves_into_free_cells() {
    let grid = Grid::classic(0.0).unwrap();
    assert_eq!(grid.step(Coord::new(0, 0), Action::Right), Coord::new(0, 1));
    assert_eq!(grid.step(Coord::new(0, 0), Action::Down), Coord::new(1, 0));
    assert_eq!(grid.step(Coord::new(3, 3), Action::Up), Coord::new(2, 3));
}

#[test]
fn step_reflects_off_obstacles() {
    let grid = Grid::classic(0.0).unwrap();
    // (1,1) is an obstacle.
    assert_eq!(grid.step(Coord::new(1, 0), Action::Right), Coord::new(1, 0));
    assert_eq!(grid.step(Coord::new(0, 1), Action::Down), Coord::new(0, 1));
    assert_eq!(grid.step(Coord::new(2, 1), Action::Up), Coord::new(2, 1));
    assert_eq!(grid.step(Coord::new(1, 2), Action::Left), Coord::new(1, 2));
}

#[test]
fn perpendiculars_rotate_consistently() {
    for action in Action::ALL {
        assert_eq!(action.clockwise().counter_clockwise(), action);
        assert_eq!(
            action.clockwise().clockwise().clockwise().clockwise(),
            action
        );
        assert_ne!(action.clockwise(), action);
        assert_ne!(action.clockwise(), action.counter_clockwise());
    }
}

// ── Validation ───────────────────────────────────────────────────────────

#[test]
fn zero_dimensions_are_rejected() {
    let err = Grid::from_layout(&GridLayout::open(0, 5), 0.0).unwrap_err();
    assert!(matches!(err, GridError::EmptyDimensions { height: 0, width: 5 }));
}

#[test]
fn out_of_bounds_obstacle_is_rejected() {
    let layout = GridLayout::open(4, 5).with_obstacle(Coord::new(4, 0));
    let err = Grid::from_layout(&layout, 0.0).unwrap_err();
    match err {
        GridError::OutOfBounds { kind, at, .. } => {
            assert_eq!(kind, "obstacle");
            assert_eq!(at, Coord::new(4, 0));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn out_of_bounds_terminal_is_rejected() {
    let layout = GridLayout::open(4, 5).with_terminal(Coord::new(0, 9), 1.0);
    let err = layout.validate().unwrap_err();
    assert!(matches!(err, GridError::OutOfBounds { kind: "terminal", .. }));
}

#[test]
fn cell_declared_twice_is_rejected() {
    let layout = GridLayout::open(3, 3)
        .with_obstacle(Coord::new(1, 1))
        .with_terminal(Coord::new(1, 1), 1.0);
    let err = layout.validate().unwrap_err();
    assert!(matches!(err, GridError::DuplicateCell { at } if at == Coord::new(1, 1)));
}

#[test]
fn non_finite_rewards_are_rejected() {
    let layout = GridLayout::open(2, 2).with_terminal(Coord::new(0, 0), f64::NAN);
    assert!(matches!(
        layout.validate(),
        Err(GridError::NonFiniteReward { .. })
    ));
    assert!(matches!(
        Grid::from_layout(&GridLayout::open(2, 2), f64::INFINITY),
        Err(GridError::NonFiniteReward { .. })
    ));
}

// ── Value function & policy ──────────────────────────────────────────────

#[test]
fn value_function_starts_at_zero_and_tracks_diff() {
    let grid = Grid::classic(0.0).unwrap();
    let mut a = ValueFunction::for_grid(&grid);
    assert!(a.as_slice().iter().all(|&v| v == 0.0));

    let mut b = a.clone();
    b.set(Coord::new(3, 2), -0.75);
    a.set(Coord::new(0, 0), 0.25);
    assert_eq!(a.max_abs_diff(&b), 0.75);
    assert_eq!(b.get(Coord::new(3, 2)), -0.75);
    assert_eq!(a.rows().count(), 4);
}

#[test]
#[should_panic(expected = "value functions differ in shape")]
fn max_abs_diff_panics_on_shape_mismatch() {
    let a = ValueFunction::zeros(4, 5);
    let b = ValueFunction::zeros(5, 4);
    let _ = a.max_abs_diff(&b);
}

#[test]
fn check_shape_compares_against_grid_dimensions() {
    let grid = Grid::classic(0.0).unwrap();
    assert!(grid.check_shape("policy", 4, 5).is_ok());
    let err = grid.check_shape("policy", 4, 4).unwrap_err();
    assert!(matches!(
        err,
        GridError::ShapeMismatch { kind: "policy", height: 4, width: 4, grid_height: 4, grid_width: 5 }
    ));
    assert_eq!(err.to_string(), "policy is 4x4 but the grid is 4x5");
}

#[test]
fn value_render_marks_obstacles() {
    let grid = Grid::classic(0.0).unwrap();
    let values = ValueFunction::for_grid(&grid);
    let rendered = values.render(&grid);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains('#'));
    assert!(lines[2].contains('#'));
    assert!(!lines[0].contains('#'));
}

#[test]
fn policy_render_shows_arrows_walls_and_terminals() {
    let grid = Grid::classic(0.0).unwrap();
    let policy = Policy::uniform(&grid, Action::Up);
    assert_eq!(policy.get(Coord::new(1, 1)), None);
    assert_eq!(policy.get(Coord::new(1, 4)), None);
    assert_eq!(policy.get(Coord::new(0, 0)), Some(Action::Up));

    let rendered = policy.render(&grid);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "↑ ↑ ↑ ↑ ↑");
    assert_eq!(lines[1], "↑ # ↑ ↑ T");
    assert_eq!(lines[2], "↑ ↑ # T ↑");
}
