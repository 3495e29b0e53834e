use gridworld_core::types::*;
use gridworld_mdp::{TransitionModel, ValueIteration};
use proptest::prelude::*;

const DISCOUNT: f64 = 0.9;
const EPS: f64 = 1e-4;

/// Small grid with one terminal and at most one obstacle.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (2usize..6, 2usize..6)
        .prop_flat_map(|(h, w)| {
            (
                Just(h),
                Just(w),
                0..h * w,
                0..h * w,
                -3.0f64..3.0,
                -2.0f64..2.0,
            )
        })
        .prop_map(|(h, w, terminal, obstacle, base, terminal_reward)| {
            let at = |i: usize| Coord::new(i / w, i % w);
            let mut layout = GridLayout::open(h, w).with_terminal(at(terminal), terminal_reward);
            if obstacle != terminal {
                layout = layout.with_obstacle(at(obstacle));
            }
            Grid::from_layout(&layout, base).unwrap()
        })
}

fn arb_model() -> impl Strategy<Value = TransitionModel> {
    (0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(intended, split)| {
        let rest = 1.0 - intended;
        let right = rest * split;
        TransitionModel::new(intended, right, 1.0 - intended - right).unwrap()
    })
}

proptest! {
    #[test]
    fn converged_values_are_fixed_points(grid in arb_grid(), model in arb_model()) {
        let solver = ValueIteration::new(DISCOUNT, EPS, model).unwrap();
        let solution = solver.solve(&grid).unwrap();
        let residual = solver.residual(&grid, &solution.values).unwrap();
        prop_assert!(residual <= EPS, "residual {} > {}", residual, EPS);
    }

    #[test]
    fn terminals_and_obstacles_keep_their_values(grid in arb_grid()) {
        let solution = ValueIteration::default().solve(&grid).unwrap();
        for at in grid.coords() {
            match grid.cell(at) {
                Cell::Terminal(reward) => prop_assert_eq!(solution.values.get(at), reward),
                Cell::Obstacle => prop_assert_eq!(solution.values.get(at), 0.0),
                Cell::Normal(_) => {}
            }
        }
    }

    #[test]
    fn values_are_bounded_by_discounted_reward(grid in arb_grid()) {
        let max_reward = grid
            .coords()
            .filter_map(|at| grid.cell(at).reward())
            .fold(0.0f64, |acc, r| acc.max(r.abs()));
        let bound = max_reward / (1.0 - DISCOUNT) + 1e-9;

        let solution = ValueIteration::default().solve(&grid).unwrap();
        for &v in solution.values.as_slice() {
            prop_assert!(v.abs() <= bound, "|{}| exceeds {}", v, bound);
        }
    }
}
