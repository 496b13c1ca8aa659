//! Терминальные возможности сессии.
//!
//! Цикл сессии не трогает stdin/stdout напрямую — он параметризован
//! трейтом [`Term`]. Так логика цикла тестируется без настоящего
//! терминала, а все управляющие последовательности собраны в одном месте.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::tty::IsTty;

/// Набор терминальных операций, нужных циклу сессии.
pub trait Term {
    /// Читает одну строку ввода.
    ///
    /// # Ошибки
    ///
    /// `ErrorKind::UnexpectedEof` — поток ввода закончился.
    fn read_line(&mut self) -> io::Result<String>;

    /// Читает один символ, не дожидаясь перевода строки.
    fn read_key(&mut self) -> io::Result<char>;

    /// Выводит строку текста с переводом строки.
    fn print_line(&mut self, text: &str) -> io::Result<()>;

    /// Выводит строку результата, визуально выделенную среди подсказок.
    fn show_result(&mut self, text: &str) -> io::Result<()>;

    /// Очищает экран и ставит курсор в левый верхний угол.
    fn clear(&mut self) -> io::Result<()>;
}

/// Реальный терминал поверх stdin/stdout.
pub struct Console {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Console {
    /// Создаёт терминал на стандартных потоках процесса.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }

    /// Ждёт нажатия печатного символа в raw-режиме.
    ///
    /// Raw-режим глушит SIGINT, поэтому Ctrl+C трактуется как `n`.
    fn wait_key() -> io::Result<char> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok('n');
                    }
                    KeyCode::Char(c) => return Ok(c),
                    _ => {}
                }
            }
        }
    }

    fn read_key_raw(&mut self) -> io::Result<char> {
        enable_raw_mode()?;
        let key = Self::wait_key();
        disable_raw_mode()?;
        let key = key?;
        // Эхо, как при построчном вводе: символ и перевод строки.
        execute!(self.stdout, Print(key), Print("\r\n"))?;
        Ok(key)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Term for Console {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.stdin.lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "поток ввода закрыт",
            ));
        }
        Ok(line)
    }

    fn read_key(&mut self) -> io::Result<char> {
        if self.stdin.is_tty() {
            self.read_key_raw()
        } else {
            // Без TTY сырое чтение недоступно: берём первый непробельный
            // символ строки. Пустая строка уходит в ветку повторного
            // запроса как непонятный ответ.
            let line = self.read_line()?;
            Ok(line.trim_start().chars().next().unwrap_or('\n'))
        }
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{text}")?;
        self.stdout.flush()
    }

    fn show_result(&mut self, text: &str) -> io::Result<()> {
        if self.stdout.is_tty() {
            execute!(
                self.stdout,
                SetForegroundColor(Color::Green),
                Print(text),
                ResetColor,
                Print("\n")
            )
        } else {
            self.print_line(text)
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.stdout.is_tty() {
            execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
