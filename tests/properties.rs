// tests/properties.rs

use lvsim::{InitialPopulations, Parameters, Simulation};
use proptest::prelude::*;

fn parameters() -> impl Strategy<Value = (InitialPopulations, Parameters)> {
    (
        1.0..5000.0f64,
        1.0..5000.0f64,
        0.1..5.0f64,
        0.001..0.1f64,
        0.001..0.1f64,
        0.1..5.0f64,
        prop::sample::select(vec![0.001, 0.01, 0.05, 0.1]),
    )
        .prop_map(|(x0, y0, a, b, c, d, delta_t)| {
            (
                InitialPopulations { x0, y0 },
                Parameters { a, b, c, d, delta_t },
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn history_columns_stay_aligned((initial, params) in parameters(), t1 in 0.0..2.0f64, t2 in 0.0..2.0f64) {
        let mut sim = Simulation::new(initial, params).unwrap();
        let s1 = sim.run_simulation(t1).unwrap();
        let s2 = sim.run_simulation(t2).unwrap();

        let history = sim.history();
        prop_assert_eq!(history.len(), 1 + s1 + s2);
        prop_assert_eq!(history.x_values().len(), history.len());
        prop_assert_eq!(history.y_values().len(), history.len());
        prop_assert_eq!(history.h_values().len(), history.len());
        prop_assert_eq!(s2, (t2 / params.delta_t).floor() as usize);
    }

    #[test]
    fn populations_stay_positive((initial, params) in parameters()) {
        let mut sim = Simulation::new(initial, params).unwrap();
        sim.run_simulation(5.0).unwrap();

        prop_assert!(sim.history().x_values().iter().all(|&x| x > 0.0));
        prop_assert!(sim.history().y_values().iter().all(|&y| y > 0.0));
    }

    #[test]
    fn time_query_round_trips_index((initial, params) in parameters(), fraction in 0.0..1.0f64) {
        let mut sim = Simulation::new(initial, params).unwrap();
        sim.run_simulation(1.0).unwrap();

        let last = sim.history().len() - 1;
        let i = (fraction * last as f64) as usize;
        let t = i as f64 * params.delta_t;
        prop_assert_eq!(sim.x_at(t), Some(sim.history().x_values()[i]));
        prop_assert_eq!(sim.y_at(t), Some(sim.history().y_values()[i]));
        prop_assert_eq!(sim.h_at(t), Some(sim.history().h_values()[i]));
        prop_assert_eq!(sim.x_at(-params.delta_t), None);
    }
}
