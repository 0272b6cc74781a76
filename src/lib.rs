//! Name numerology: validate a full name, reduce its letters to a value and look up the
//! matching interpretation.
//!
//! ```
//! use numerology::{catalog, engine, validator};
//!
//! let name = "Ana Lima";
//! assert!(validator::is_valid(name));
//! let value = engine::compute_value(name);
//! assert_eq!(value, 6);
//! assert!(catalog::describe(value).starts_with("É a Família"));
//! ```

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod logging;
pub mod validator;

pub use calculator::{Calculator, Explanation, Reading};
pub use catalog::describe;
pub use engine::compute_value;
pub use validator::is_valid;
