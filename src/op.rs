//! Замкнутый набор арифметических операций.
//!
//! # Примеры
//!
//! ```
//! use promptcalc::op::Op;
//!
//! let op: Op = "+".parse().unwrap();
//! assert_eq!(op.apply(2.0, 3.0), 5.0);
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Ошибка разбора оператора: ввод вне набора `+ - * /`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("неизвестный оператор {input:?}")]
pub struct OperatorError {
    /// Отклонённый ввод (уже без окружающих пробелов).
    pub input: String,
}

/// Бинарная арифметическая операция.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Сложение `+`.
    Add,
    /// Вычитание `-`.
    Sub,
    /// Умножение `*`.
    Mul,
    /// Деление `/`.
    Div,
}

impl Op {
    /// Применить операцию к операндам.
    ///
    /// Валидации нет: допустимы любые `f64`. Деление подчиняется
    /// семантике IEEE-754, поэтому `x / 0.0` даёт знаковую бесконечность
    /// (или NaN для `0.0 / 0.0`), а не ошибку.
    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Add => x + y,
            Self::Sub => x - y,
            Self::Mul => x * y,
            Self::Div => x / y,
        }
    }

    /// Символ операции.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl FromStr for Op {
    type Err = OperatorError;

    /// Разбирает оператор. Ввод должен быть уже без окружающих пробелов;
    /// обрезкой занимается [`crate::parse::parse_operator`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            _ => Err(OperatorError {
                input: s.to_owned(),
            }),
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_basic() {
        assert_eq!(Op::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Op::Sub.apply(5.0, 3.0), 2.0);
        assert_eq!(Op::Mul.apply(5.0, 3.0), 15.0);
        assert_eq!(Op::Div.apply(15.0, 3.0), 5.0);
    }

    #[test]
    fn div_by_zero_is_infinity() {
        assert_eq!(Op::Div.apply(10.0, 0.0), f64::INFINITY);
        assert_eq!(Op::Div.apply(-10.0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn zero_div_zero_is_nan() {
        assert!(Op::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn overflow_propagates_silently() {
        assert_eq!(Op::Mul.apply(f64::MAX, 2.0), f64::INFINITY);
    }

    #[test]
    fn from_str_accepts_the_four_symbols() {
        assert_eq!("+".parse(), Ok(Op::Add));
        assert_eq!("-".parse(), Ok(Op::Sub));
        assert_eq!("*".parse(), Ok(Op::Mul));
        assert_eq!("/".parse(), Ok(Op::Div));
    }

    #[test]
    fn from_str_rejects_everything_else() {
        for bad in ["x", "++", "", "plus", "**", "%"] {
            let err = bad.parse::<Op>().unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn display_matches_symbol() {
        assert_eq!(Op::Add.to_string(), "+");
        assert_eq!(Op::Div.to_string(), "/");
    }
}
