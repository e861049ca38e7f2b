//! Two stage keyed line cipher: a keyword-derived shift substitution
//! composed with a grouped columnar transposition.
//!
//! One keyword drives both stages. Its vowel and consonant counts fix the
//! shift amount, and the alphabetical ranks of its distinct letters fix
//! the transposition columns, with recurring letters pooling into a
//! shared column. Lines are transformed independently; anything other
//! than an ASCII letter is dropped on the way in.
//!
//! ```
//! use cipherkit_core::{decipher_line, encipher_line, Keyword};
//!
//! let keyword = Keyword::parse("BALLOON")?;
//! let ciphertext = encipher_line("Hello, World!", &keyword);
//! assert_eq!(ciphertext, "QXTDXXPAAI");
//! assert_eq!(decipher_line(&ciphertext, &keyword)?, "HELLOWORLD");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
use strum::Display;

/// Direction a line or file transform runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Plaintext in, ciphertext out.
    Encipher,
    /// Ciphertext in, plaintext out.
    Decipher,
}

mod error;
pub use error::*;

mod keyword;
pub use keyword::*;

mod pipeline;
pub use pipeline::*;

mod schedule;
pub use schedule::*;

mod store;
pub use store::*;

// stage modules, addressed by name
pub mod shift;
pub mod transpose;
