#[derive(thiserror::Error, Debug)]
pub enum BlankinshipError {
    /// A value that cannot take part in exact rational arithmetic: non-integral
    /// numerator or denominator text, an empty coefficient list, or a solver
    /// asked for the gcd of two zero polynomials.
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
    /// A fraction with a zero denominator would have been produced.
    #[error("DivisionByZero: {0}")]
    DivisionByZero(String),

    #[error("Data serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
