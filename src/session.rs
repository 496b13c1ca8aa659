//! Интерактивный цикл: запрос ввода, вычисление, показ результата,
//! подтверждение продолжения.
//!
//! Каждый шаг с пользовательским вводом — маленький цикл с единственным
//! предикатом выхода: получено корректное значение. Ошибки формата ввода
//! наружу не выходят, они гасятся повторным запросом на месте. Наружу
//! распространяются только ошибки ввода-вывода терминала.

use std::io;

use crate::op::Op;
use crate::parse::{parse_operand, parse_operator};
use crate::term::Term;

/// Решение пользователя после показа результата.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Начать новое вычисление.
    Continue,
    /// Завершить работу.
    Quit,
}

/// Интерактивная сессия калькулятора.
///
/// Держит только терминал; состояние одного вычисления живёт на стеке
/// и умирает вместе с итерацией.
pub struct Session<T> {
    term: T,
}

impl<T: Term> Session<T> {
    /// Создаёт сессию поверх заданного терминала.
    pub fn new(term: T) -> Self {
        Self { term }
    }

    /// Возвращает терминал, поглощая сессию.
    pub fn into_term(self) -> T {
        self.term
    }

    /// Запускает внешний цикл: вычисление, результат, вопрос о
    /// продолжении. Единственный штатный выход — ответ `n`.
    ///
    /// # Ошибки
    ///
    /// Возвращает ошибку ввода-вывода терминала (например, закрытый
    /// stdin). Ошибки формата ввода сюда не попадают.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let result = self.calculate()?;
            self.term.show_result(&format!("Result: {result}"))?;
            self.term.print_line("Perform another calculation? (y/n)")?;
            match self.read_decision()? {
                Decision::Continue => self.term.clear()?,
                Decision::Quit => return Ok(()),
            }
        }
    }

    /// Одно вычисление: два операнда, оператор между ними,
    /// диспетчеризация через [`Op::apply`].
    fn calculate(&mut self) -> io::Result<f64> {
        let first = self.read_operand(
            "Enter the first number:",
            "Please enter a valid decimal number for the first operand:",
        )?;
        let op = self.read_operator()?;
        let second = self.read_operand(
            "Enter the second number:",
            "Please enter a valid decimal number for the second operand:",
        )?;
        log::debug!("вычисление: {first} {op} {second}");
        Ok(op.apply(first, second))
    }

    /// Читает операнд, повторяя запрос до корректного числа.
    fn read_operand(&mut self, prompt: &str, retry: &str) -> io::Result<f64> {
        self.term.print_line(prompt)?;
        loop {
            let line = self.term.read_line()?;
            match parse_operand(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::debug!("операнд отклонён: {err}");
                    self.term.print_line(retry)?;
                }
            }
        }
    }

    /// Читает оператор, повторяя запрос до символа из набора `+ - * /`.
    fn read_operator(&mut self) -> io::Result<Op> {
        self.term.print_line("Enter the operator (+, -, *, /):")?;
        loop {
            let line = self.term.read_line()?;
            match parse_operator(&line) {
                Ok(op) => return Ok(op),
                Err(err) => {
                    log::debug!("оператор отклонён: {err}");
                    self.term
                        .print_line("Please enter a supported operator (+, -, *, /):")?;
                }
            }
        }
    }

    /// Читает решение о продолжении: один символ без учёта регистра.
    fn read_decision(&mut self) -> io::Result<Decision> {
        loop {
            let key = self.term.read_key()?;
            match key.to_ascii_lowercase() {
                'y' => return Ok(Decision::Continue),
                'n' => return Ok(Decision::Quit),
                other => {
                    log::debug!("непонятный ответ: {other:?}");
                    self.term.print_line(
                        "Please press \"y\" to perform another calculation or \"n\" to quit the app:",
                    )?;
                }
            }
        }
    }
}
