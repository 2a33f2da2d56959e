//! Expression parsing and evaluation.
//!
//! One input line holds `<numeral> <operator> <numeral>`. Parsing never
//! fails: missing tokens become empty operands, surplus tokens are ignored,
//! and evaluation proceeds with whatever the converter yields for them.

use crate::core::roman;
use crate::types::Operator;

/// A parsed expression line. Operands are kept as raw token text so the
/// report can echo exactly what was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub lhs: String,
    pub operator: Option<Operator>,
    pub rhs: String,
}

impl Expression {
    /// Split a line into its operand and operator tokens.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let lhs = tokens.next().unwrap_or("").to_string();
        let operator = tokens.next().and_then(Operator::from_token);
        let rhs = tokens.next().unwrap_or("").to_string();
        Self { lhs, operator, rhs }
    }

    /// Evaluate the expression. An unrecognized or absent operator yields 0.
    pub fn evaluate(&self) -> i64 {
        let lhs = roman::roman_to_integer(&self.lhs);
        let rhs = roman::roman_to_integer(&self.rhs);
        match self.operator {
            Some(op) => op.apply(lhs, rhs),
            None => 0,
        }
    }

    /// True when the operator is recognized and both operands are classic
    /// Roman numerals. Drives diagnostics only; evaluation is permissive.
    pub fn is_well_formed(&self) -> bool {
        self.operator.is_some()
            && roman::is_classic_numeral(&self.lhs)
            && roman::is_classic_numeral(&self.rhs)
    }
}

/// Parse and evaluate one line in a single step.
pub fn evaluate_line(line: &str) -> i64 {
    Expression::parse(line).evaluate()
}
