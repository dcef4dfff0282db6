//! A memory calculator whose entire state is a plain value.
//!
//! Every operation consumes the current [`Calculator`] and returns the next one, so callers keep
//! (or discard) states explicitly:
//!
//! ```
//! use yearcal::Calculator;
//!
//! let calc = Calculator::default().enter(9.0).sqrt()?.memory_add().add(1.0);
//! assert_eq!(calc.value(), 4.0);
//! assert_eq!(calc.memory(), 3.0);
//! assert_eq!(calc.memory_recall().value(), 3.0);
//! # Ok::<(), yearcal::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::Result;

/// The current value and the memory register.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Calculator {
  value: f64,
  memory: f64,
}

impl Calculator {
  pub const fn value(&self) -> f64 {
    self.value
  }

  pub const fn memory(&self) -> f64 {
    self.memory
  }

  /// Replace the current value.
  #[must_use]
  pub const fn enter(self, value: f64) -> Self {
    Self { value, ..self }
  }

  #[must_use]
  pub fn add(self, operand: f64) -> Self {
    self.enter(self.value + operand)
  }

  #[must_use]
  pub fn sub(self, operand: f64) -> Self {
    self.enter(self.value - operand)
  }

  #[must_use]
  pub fn mul(self, operand: f64) -> Self {
    self.enter(self.value * operand)
  }

  /// Divide the current value. A zero divisor fails and leaves the state unchanged.
  pub fn div(self, divisor: f64) -> Result<Self> {
    match divisor == 0.0 {
      true => Err(Error::DivisionByZero),
      false => Ok(self.enter(self.value / divisor)),
    }
  }

  /// The remainder of the current value divided by `divisor`, with the sign of the current value.
  pub fn rem(self, divisor: f64) -> Result<Self> {
    match divisor == 0.0 {
      true => Err(Error::DivisionByZero),
      false => Ok(self.enter(self.value % divisor)),
    }
  }

  /// `1/x`.
  pub fn reciprocal(self) -> Result<Self> {
    match self.value == 0.0 {
      true => Err(Error::DivisionByZero),
      false => Ok(self.enter(1.0 / self.value)),
    }
  }

  /// `x^2`.
  #[must_use]
  pub fn square(self) -> Self {
    self.enter(self.value * self.value)
  }

  pub fn sqrt(self) -> Result<Self> {
    match self.value < 0.0 {
      true => Err(Error::invalid(format!("square root of negative number {}", self.value))),
      false => Ok(self.enter(self.value.sqrt())),
    }
  }

  /// `M+`: add the current value to memory.
  #[must_use]
  pub fn memory_add(self) -> Self {
    Self { memory: self.memory + self.value, ..self }
  }

  /// `M-`: subtract the current value from memory.
  #[must_use]
  pub fn memory_sub(self) -> Self {
    Self { memory: self.memory - self.value, ..self }
  }

  /// `MR`: make the memory the current value.
  #[must_use]
  pub fn memory_recall(self) -> Self {
    self.enter(self.memory)
  }

  /// Apply a parsed [`Operation`]. Binary operations need an `operand`; the others ignore it.
  pub fn apply(self, op: Operation, operand: Option<f64>) -> Result<Self> {
    let rhs = || operand.ok_or_else(|| Error::invalid(format!("{op} needs an operand")));
    Ok(match op {
      Operation::Enter(value) => self.enter(value),
      Operation::Add => self.add(rhs()?),
      Operation::Sub => self.sub(rhs()?),
      Operation::Mul => self.mul(rhs()?),
      Operation::Div => self.div(rhs()?)?,
      Operation::Rem => self.rem(rhs()?)?,
      Operation::Reciprocal => self.reciprocal()?,
      Operation::Square => self.square(),
      Operation::Sqrt => self.sqrt()?,
      Operation::MemoryAdd => self.memory_add(),
      Operation::MemorySub => self.memory_sub(),
      Operation::MemoryRecall => self.memory_recall(),
    })
  }
}

/// A calculator key, as typed at the console.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Operation {
  /// A bare number replaces the current value.
  Enter(f64),
  Add,
  Sub,
  Mul,
  Div,
  Rem,
  Reciprocal,
  Square,
  Sqrt,
  MemoryAdd,
  MemorySub,
  MemoryRecall,
}

impl Operation {
  /// Whether this operation reads a second number.
  pub const fn is_binary(&self) -> bool {
    matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Rem)
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let token = match self {
      Self::Enter(value) => return write!(f, "{value}"),
      Self::Add => "+",
      Self::Sub => "-",
      Self::Mul => "*",
      Self::Div => "/",
      Self::Rem => "%",
      Self::Reciprocal => "1/x",
      Self::Square => "x^2",
      Self::Sqrt => "sqrt",
      Self::MemoryAdd => "M+",
      Self::MemorySub => "M-",
      Self::MemoryRecall => "MR",
    };
    f.write_str(token)
  }
}

impl FromStr for Operation {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Ok(match s.trim() {
      "+" => Self::Add,
      "-" => Self::Sub,
      "*" => Self::Mul,
      "/" => Self::Div,
      "%" => Self::Rem,
      "1/x" => Self::Reciprocal,
      "x^2" => Self::Square,
      "sqrt" => Self::Sqrt,
      "M+" => Self::MemoryAdd,
      "M-" => Self::MemorySub,
      "MR" => Self::MemoryRecall,
      other => match other.parse::<f64>() {
        Ok(value) if value.is_finite() => Self::Enter(value),
        _ => return Err(Error::invalid(format!("unknown operation {other:?}"))),
      },
    })
  }
}
