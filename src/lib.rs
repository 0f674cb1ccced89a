//! Registry-based command-line argument definition and parsing.
//!
//! Callers register named flags and value-consuming options (aliases,
//! description, default value, required/optional), then run a single
//! left-to-right scan over the process argument vector. The parser
//! records supplied values, collects unrecognized tokens, optionally
//! prints an automatic `-h`/`--help` listing, and reports failures both
//! as returned [`Error`] values and through an optional caller-supplied
//! callback — callers decide whether any failure is fatal.
//!
//! # Example
//!
//! ```
//! use argreg::{ArgParser, ErrorKind};
//!
//! let mut parser = ArgParser::with_post_help(|| {
//!     // typically: print a trailer and std::process::exit(0)
//! });
//! parser.set_error_cb(|kind, context| eprintln!("error [{kind}] {context}"));
//!
//! parser.register_option(&["-n", "--name"], "Who to greet", "world", false)?;
//! parser.register_flag(&["-l", "--loud"], "Shout the greeting", false, false)?;
//!
//! parser.parse(["greet", "--name", "rustacean", "-l"])?;
//!
//! assert_eq!(parser.get::<String>("--name").as_deref(), Some("rustacean"));
//! assert_eq!(parser.get::<bool>("-l"), Some(true));
//! assert!(parser.unmatched().is_empty());
//! # Ok::<(), argreg::Error>(())
//! ```

mod error;
mod help;
mod parser;
mod value;

pub use error::{Error, ErrorKind};
pub use parser::{ArgParser, ErrorCb, PostHelpCb};
pub use value::{ArgValue, FromArgText};
