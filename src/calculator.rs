//! Arithmetic core.
//!
//! [`Calculator`] performs the four binary operations over `f64` operands and
//! remembers the result of the last one that succeeded.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Operation name outside `add`, `subtract`, `multiply`, `divide`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

/// Binary operation selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone)]
pub struct Calculator {
    last_result: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.record(a + b)
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.record(a - b)
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.record(a * b)
    }

    /// Divide `a` by `b`.
    ///
    /// A zero divisor (either sign) fails with [`CalcError::DivisionByZero`]
    /// and leaves the last result untouched.
    pub fn divide(&mut self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(self.record(a / b))
    }

    /// Result of the most recent successful operation, `0.0` before any.
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub fn apply(&mut self, op: Operation, a: f64, b: f64) -> CalcResult<f64> {
        tracing::debug!(target: "calculator", "{op}({a}, {b})");
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }

    fn record(&mut self, value: f64) -> f64 {
        self.last_result = value;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_updates_last_result() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(2.0, 3.0), 5.0);
        assert_eq!(calc.last_result(), 5.0);
    }

    #[test]
    fn test_add_negative_operand() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(-5.0, 3.0), -2.0);
    }

    #[test]
    fn test_subtract() {
        let mut calc = Calculator::new();
        assert_eq!(calc.subtract(10.0, 3.0), 7.0);
        assert_eq!(calc.last_result(), 7.0);
    }

    #[test]
    fn test_multiply() {
        let mut calc = Calculator::new();
        assert_eq!(calc.multiply(4.0, 5.0), 20.0);
    }

    #[test]
    fn test_divide() {
        let mut calc = Calculator::new();
        assert_eq!(calc.divide(10.0, 2.0), Ok(5.0));
        assert_eq!(calc.last_result(), 5.0);
    }

    #[test]
    fn test_divide_by_zero_keeps_last_result() {
        let mut calc = Calculator::new();
        calc.add(1.0, 1.0);

        let err = calc.divide(10.0, 0.0).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");
        assert_eq!(calc.last_result(), 2.0);

        // Negative zero is still zero
        assert!(calc.divide(1.0, -0.0).is_err());
        assert_eq!(calc.last_result(), 2.0);
    }

    #[test]
    fn test_last_result_tracks_latest_success() {
        let mut calc = Calculator::new();
        assert_eq!(calc.last_result(), 0.0);

        calc.add(1.0, 1.0);
        calc.multiply(2.0, 3.0);
        assert_eq!(calc.last_result(), 6.0);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut calc = Calculator::new();
        assert_eq!(calc.apply(Operation::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(calc.apply(Operation::Subtract, 2.0, 3.0), Ok(-1.0));
        assert_eq!(calc.apply(Operation::Multiply, 2.0, 3.0), Ok(6.0));
        assert_eq!(calc.apply(Operation::Divide, 3.0, 2.0), Ok(1.5));
        assert_eq!(
            calc.apply(Operation::Divide, 3.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(calc.last_result(), 1.5);
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("subtract".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("multiply".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("divide".parse::<Operation>(), Ok(Operation::Divide));

        // Names are case sensitive
        assert_eq!(
            "Add".parse::<Operation>(),
            Err(UnknownOperation("Add".to_string()))
        );
        assert_eq!(
            UnknownOperation("pow".to_string()).to_string(),
            "unknown operation: pow"
        );
    }

    #[test]
    fn test_operation_display_round_trips_name() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }
}
