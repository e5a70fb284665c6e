//! Black-box behavior of the safeguarded Newton solver.

use approx::assert_relative_eq;

use plumb_solvers::scalar::newton_bisection::{self, Config, Event, Method, Status};

/// f(x) = x² - 2, with a simple root at √2.
fn sqrt2(x: f64) -> (f64, f64) {
    (x * x - 2.0, 2.0 * x)
}

#[test]
fn converges_within_bisection_budget() {
    // Worst case is bisection: ceil(log2(width / tol)) steps plus the
    // three initialization evaluations.
    let width: f64 = 2.0;
    let tol = 1e-10;
    let budget = (width / tol).log2().ceil() as usize + 3;

    let config = Config {
        abs_tol: tol,
        max_evals: 100,
    };
    let solution =
        newton_bisection::solve_unobserved(&sqrt2, [0.0, 2.0], 1.0, &config).expect("converges");

    assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-10);
    assert!(
        solution.evaluations <= budget,
        "spent {} evaluations, bisection bound is {budget}",
        solution.evaluations
    );
}

#[test]
fn bracket_shrinks_monotonically_and_keeps_sign_change() {
    let f = |x: f64| ((x - 0.3).tanh(), 1.0 / (x - 0.3).cosh().powi(2));

    let mut events: Vec<Event> = Vec::new();
    let observer = |event: &Event| events.push(*event);

    newton_bisection::solve(&f, [-2.0, 1.5], -1.0, &Config::default(), observer)
        .expect("converges");

    assert!(!events.is_empty());
    for pair in events.windows(2) {
        let [before, after] = pair else { unreachable!() };

        let width = |bracket: [f64; 2]| bracket[1] - bracket[0];
        assert!(width(after.bracket) <= width(before.bracket));

        let [lower, upper] = after.bracket;
        let (f_lower, _) = f(lower);
        let (f_upper, _) = f(upper);
        assert!(
            f_lower * f_upper < 0.0,
            "sign change lost on [{lower}, {upper}]"
        );
    }
}

#[test]
fn evaluation_counter_is_consecutive() {
    let mut counters: Vec<usize> = Vec::new();
    let observer = |event: &Event| counters.push(event.evaluations);

    newton_bisection::solve(&sqrt2, [0.0, 2.0], 1.0, &Config::default(), observer)
        .expect("converges");

    for (offset, counter) in counters.iter().enumerate() {
        assert_eq!(*counter, 3 + offset);
    }
}

#[test]
fn newton_steps_dominate_near_a_simple_root() {
    let mut methods: Vec<Method> = Vec::new();
    let observer = |event: &Event| methods.push(event.method);

    let solution = newton_bisection::solve(&sqrt2, [0.0, 2.0], 1.0, &Config::default(), observer)
        .expect("converges");

    let newton_steps = methods.iter().filter(|m| **m == Method::Newton).count();
    assert!(
        newton_steps * 2 > methods.len(),
        "expected mostly Newton steps, got {newton_steps} of {}",
        methods.len()
    );
    assert!(solution.evaluations < 15, "Newton should converge quickly");
}

#[test]
fn is_deterministic() {
    let run = || {
        let mut events: Vec<Event> = Vec::new();
        let observer = |event: &Event| events.push(*event);
        let solution = newton_bisection::solve(&sqrt2, [0.0, 2.0], 1.7, &Config::default(), observer)
            .expect("converges");
        (solution, events)
    };

    let (first_solution, first_events) = run();
    let (second_solution, second_events) = run();

    assert_eq!(first_solution, second_solution);
    assert_eq!(first_events, second_events);
}

#[test]
fn observation_does_not_change_the_outcome() {
    let observed = newton_bisection::solve(&sqrt2, [0.0, 2.0], 1.0, &Config::default(), |_: &Event| {})
        .expect("converges");
    let unobserved = newton_bisection::solve_unobserved(&sqrt2, [0.0, 2.0], 1.0, &Config::default())
        .expect("converges");

    assert_eq!(observed, unobserved);
}

#[test]
fn cube_root_of_twenty_seven() {
    let f = |x: f64| (x * x * x - 27.0, 3.0 * x * x);

    let solution = newton_bisection::solve_unobserved(&f, [0.0, 10.0], 5.0, &Config::default())
        .expect("converges");

    assert_eq!(solution.status, Status::StepConverged);
    assert_relative_eq!(solution.root, 3.0, epsilon = 1e-9);
}

#[test]
fn steep_function_with_nearby_flat_regions() {
    // tanh(20x) is nearly flat away from the origin, which starves
    // Newton of slope information until the bracket tightens.
    let f = |x: f64| {
        let t = (20.0 * x).tanh();
        (t, 20.0 * (1.0 - t * t))
    };

    let solution = newton_bisection::solve_unobserved(&f, [-3.0, 2.0], -2.5, &Config::default())
        .expect("converges");

    assert_relative_eq!(solution.root, 0.0, epsilon = 1e-9);
}
