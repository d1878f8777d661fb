//! # exacta
//!
//! Exact big integer and rational arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let a = Integer::new(10).pow(20).unwrap();
//! assert_eq!((&a * &a).to_string(), format!("1{}", "0".repeat(40)));
//!
//! let r: Rational = "6/8".parse().unwrap();
//! assert_eq!(r.to_string(), "3/4");
//! assert_eq!(Rational::from_f64(std::f64::consts::PI, 1000).unwrap().to_string(), "355/113");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_integers as integers;
pub use exacta_integers::{ArithError, Integer, Rational, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exacta_integers::{
        boole, ArithError, BooleOp, DenominatorPolicy, Integer, ParseError, RandomState,
        Rational, RationalResultExt, Sign, SignDisplay, Terminator,
    };
    pub use num_traits::{One, Zero};
}
