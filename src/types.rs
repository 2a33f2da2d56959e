//! Shared types and enums used across ROMANCALC.
//! Includes the expression `Operator`, the `MalformedPolicy` for lines that
//! do not parse cleanly, and the `ReportEntry` written per input line.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    /// Classify an operator token. Only a single supported character counts;
    /// anything else (including multi-character tokens) is unrecognized.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let op = match (chars.next()?, chars.next()) {
            ('+', None) => Operator::Add,
            ('-', None) => Operator::Sub,
            ('*', None) => Operator::Mul,
            _ => return None,
        };
        Some(op)
    }

    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
        };
        write!(f, "{}", s)
    }
}

/// What to do when an input line does not parse into two numerals and a
/// supported operator. Evaluation proceeds permissively either way; the
/// policy only controls the per-line diagnostic.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum MalformedPolicy {
    Warn,
    Silent,
}

impl std::fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedPolicy::Warn => write!(f, "Warn"),
            MalformedPolicy::Silent => write!(f, "Silent"),
        }
    }
}

/// One formatted block of the report: the original expression line, its
/// decimal value, and the value rendered as English words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub expression: String,
    pub value: i64,
    pub words: String,
}
