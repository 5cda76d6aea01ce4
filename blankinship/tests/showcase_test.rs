use blankinship::config::SolverConfig;
use blankinship::errors::BlankinshipError;
use blankinship::ring::Polynomial;
use blankinship::solver::{ExtendedGcdSolver, State};

use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

#[test]
fn showcase_traced_solve() -> Result<(), BlankinshipError> {
    init_logging();

    let p = Polynomial::new([-1, -4, -3, 1, 1]);
    let q = Polynomial::new([-1, -1, 1, 1]);

    let mut solver = ExtendedGcdSolver::new(p.clone(), q.clone())
        .with_config(SolverConfig::try_with(true, 6)?);

    println!("{}\n", solver.matrix());
    while solver.state() == State::Reducing {
        solver.step()?;
        println!("{}\n", solver.matrix());
        assert!(solver.invariant_holds());
    }

    let result = solver.solve()?;

    println!("U   = {}", result.u);
    println!("V   = {}", result.v);
    println!("GCD = {}", result.gcd);

    assert!(result.check(&p, &q));
    Ok(())
}
