use blankinship::config::SolverConfig;
use blankinship::errors::BlankinshipError;
use blankinship::ring::Polynomial;
use blankinship::solver::ExtendedGcdSolver;

use std::process::ExitCode;

// P = X^4 + X^3 - 3X^2 - 4X - 1
const DEFAULT_P: &str = "[-1, -4, -3, 1, 1]";
// Q = X^3 + X^2 - X - 1
const DEFAULT_Q: &str = "[-1, -1, 1, 1]";

const USAGE: &str = "usage: blankinship-demo [P_JSON Q_JSON] [--trace]";
const TRACE_FLAG: &str = "--trace";

/// Log filter used when `RUST_LOG` is unset. `--trace` needs debug level, where
/// the solver logs the matrix after each step.
fn default_log_filter(trace_steps: bool) -> &'static str {
    if trace_steps { "debug" } else { "error" }
}

fn run(args: &[String]) -> Result<(), BlankinshipError> {
    let trace_steps = args.iter().any(|arg| arg == TRACE_FLAG);
    let polynomials: Vec<&str> = args
        .iter()
        .filter(|arg| *arg != TRACE_FLAG)
        .map(String::as_str)
        .collect();

    let (p_json, q_json) = match polynomials.as_slice() {
        [] => (DEFAULT_P, DEFAULT_Q),
        [p, q] => (*p, *q),
        _ => {
            return Err(BlankinshipError::InvalidArgument(USAGE.to_string()));
        }
    };

    let p = Polynomial::from_json(p_json)?;
    let q = Polynomial::from_json(q_json)?;

    println!("P   = {}", p);
    println!("Q   = {}", q);
    println!();

    let config = SolverConfig {
        trace_steps,
        ..SolverConfig::default()
    };
    let result = ExtendedGcdSolver::new(p.clone(), q.clone())
        .with_config(config)
        .solve()?;

    println!("U   = {}", result.u);
    println!("V   = {}", result.v);
    println!("GCD = {}", result.gcd);
    println!("P*U + Q*V == GCD: {}", result.check(&p, &q));

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let trace_steps = args.iter().any(|arg| arg == TRACE_FLAG);

    // Log to stderr; `RUST_LOG` still overrides the default filter.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(trace_steps)),
    )
    .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_flag_enables_debug_logging() {
        assert_eq!(default_log_filter(true), "debug");
        assert_eq!(default_log_filter(false), "error");
    }

    #[test]
    fn test_run_rejects_single_polynomial() {
        let args = vec!["[1, 1]".to_string(), TRACE_FLAG.to_string()];
        assert!(matches!(
            run(&args),
            Err(BlankinshipError::InvalidArgument(_))
        ));
    }
}
