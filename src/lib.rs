//! # promptcalc
//!
//! Интерактивный консольный калькулятор: два десятичных операнда, один
//! оператор из набора `+ - * /`, результат и вопрос о продолжении.
//!
//! Поддерживает:
//! - Операнды `f64`, включая экспоненциальную запись (`1e10`)
//! - Бинарные операции: `+`, `-`, `*`, `/`
//! - Деление на ноль по правилам IEEE-754 (бесконечность, не ошибка)
//! - Повторный запрос при любом некорректном вводе
//!
//! Логика цикла живёт в [`session::Session`] и параметризована трейтом
//! [`term::Term`], поэтому тестируется без настоящего терминала.
//!
//! # Пример использования
//!
//! ```
//! use promptcalc::op::Op;
//!
//! assert_eq!(Op::Add.apply(5.0, 3.0), 8.0);
//! assert!(Op::Div.apply(10.0, 0.0).is_infinite());
//! ```

pub mod op;
pub mod parse;
pub mod session;
pub mod term;

use session::Session;
use term::Console;

/// Запускает интерактивную сессию на реальном терминале.
///
/// Блокируется до решения пользователя выйти (ответ `n`).
///
/// # Ошибки
///
/// Возвращает ошибку ввода-вывода: закрытый stdin или отказ терминала.
/// Некорректный пользовательский ввод ошибкой не считается.
pub fn run() -> std::io::Result<()> {
    Session::new(Console::new()).run()
}
