//! Разбор пользовательского ввода: операнды и операторы.
//!
//! Функции принимают сырую строку, как она прочитана с терминала, сами
//! обрезают окружающие пробелы и возвращают типизированную ошибку при
//! некорректном вводе. Ошибки не показываются пользователю напрямую:
//! цикл сессии реагирует на них повторным запросом.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::op::{Op, OperatorError};

/// Ошибка разбора операнда.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("некорректный операнд {input:?}: {source}")]
pub struct OperandError {
    /// Отклонённый ввод (после обрезки пробелов).
    pub input: String,
    /// Исходная ошибка числового разбора.
    #[source]
    pub source: ParseFloatError,
}

/// Разбирает операнд — десятичное число с плавающей точкой.
///
/// Принимает всё, что принимает `str::parse::<f64>`: обычную десятичную
/// запись, экспоненциальную (`1e10`) и специальные значения (`inf`, `NaN`).
/// Диапазон не ограничивается, переполнение в бесконечность допустимо.
///
/// # Ошибки
///
/// Возвращает [`OperandError`], если строка не является числом.
///
/// # Примеры
///
/// ```
/// use promptcalc::parse::parse_operand;
///
/// assert_eq!(parse_operand(" -2.5 ").unwrap(), -2.5);
/// assert!(parse_operand("abc").is_err());
/// ```
pub fn parse_operand(input: &str) -> Result<f64, OperandError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|source| OperandError {
        input: trimmed.to_owned(),
        source,
    })
}

/// Разбирает оператор из замкнутого набора `+ - * /`.
///
/// Окружающие пробелы игнорируются, поэтому `" + "` принимается.
///
/// # Ошибки
///
/// Возвращает [`OperatorError`] для любой строки вне набора.
///
/// # Примеры
///
/// ```
/// use promptcalc::op::Op;
/// use promptcalc::parse::parse_operator;
///
/// assert_eq!(parse_operator(" * ").unwrap(), Op::Mul);
/// assert!(parse_operator("++").is_err());
/// ```
pub fn parse_operator(input: &str) -> Result<Op, OperatorError> {
    input.trim().parse()
}
