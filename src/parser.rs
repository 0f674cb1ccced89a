use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{Error, ErrorKind};
use crate::help;
use crate::value::{ArgValue, FromArgText};

/// Callback invoked after the help listing has been printed.
///
/// Typically used to exit the process; if it returns (or is absent), the
/// scan continues and required-argument checks still apply afterwards.
pub type PostHelpCb = Box<dyn Fn()>;

/// Callback invoked with every reported error and its context string (the
/// offending alias, or a definition's space-joined alias list).
pub type ErrorCb = Box<dyn Fn(ErrorKind, &str)>;

/// One registered definition, including its mutable parse state.
///
/// Definitions live directly in the registry's ordered vector; the alias
/// lookup indexes into it.
#[derive(Debug)]
pub(crate) struct ArgDef {
    pub(crate) aliases: Vec<String>,
    pub(crate) description: String,
    pub(crate) default_text: String,
    /// Current textual value; starts as the normalized default.
    pub(crate) value: String,
    /// `None` = optional; `Some(false)` = required, not yet seen;
    /// `Some(true)` = required and satisfied.
    pub(crate) satisfied: Option<bool>,
    pub(crate) is_flag: bool,
}

/// Argument definition registry and single-pass parser.
///
/// Callers register flags and value-consuming options, then hand the
/// process argument vector to [`parse`](Self::parse) exactly once.
/// Errors are dual-path: every failing operation returns an [`Error`]
/// and also invokes the error callback when one is set.
///
/// # Example
///
/// ```
/// use argreg::ArgParser;
///
/// let mut parser = ArgParser::new();
/// parser
///     .register_option(&["-o", "--output"], "Output file", "out.txt", false)
///     .unwrap();
/// parser.register_flag(&["-v", "--verbose"], "Verbose output", false, false).unwrap();
///
/// parser.parse(["prog", "--verbose"]).unwrap();
/// assert_eq!(parser.get::<bool>("--verbose"), Some(true));
/// assert_eq!(parser.get::<String>("-o").as_deref(), Some("out.txt"));
/// ```
pub struct ArgParser {
    defs: Vec<ArgDef>,
    lookup: HashMap<String, usize>,
    unmatched: Vec<String>,
    program_name: String,
    auto_help: bool,
    post_help_cb: Option<PostHelpCb>,
    error_cb: Option<ErrorCb>,
}

impl Default for ArgParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgParser {
    /// Create a parser with automatic `-h`/`--help` handling enabled and
    /// no callbacks set.
    pub fn new() -> Self {
        Self {
            defs: Vec::new(),
            lookup: HashMap::new(),
            unmatched: Vec::new(),
            program_name: String::new(),
            auto_help: true,
            post_help_cb: None,
            error_cb: None,
        }
    }

    /// Create a parser with a post-help callback already installed.
    pub fn with_post_help(cb: impl Fn() + 'static) -> Self {
        let mut parser = Self::new();
        parser.post_help_cb = Some(Box::new(cb));
        parser
    }

    /// Install the error callback. Replaces any previous one.
    pub fn set_error_cb(&mut self, cb: impl Fn(ErrorKind, &str) + 'static) {
        self.error_cb = Some(Box::new(cb));
    }

    /// Enable or disable automatic help handling.
    ///
    /// When disabled, `-h`/`--help` get no special treatment: they resolve
    /// like any other token (unmatched unless registered) and the caller
    /// is responsible for acting on them.
    pub fn set_auto_help(&mut self, enable: bool) {
        self.auto_help = enable;
    }

    /// Register a value-consuming option.
    ///
    /// Fails with [`ErrorKind::DuplicateDefinition`] if any alias is
    /// already claimed; in that case nothing from this call is inserted.
    /// The default value is normalized to text at this boundary.
    pub fn register_option(
        &mut self,
        aliases: &[&str],
        description: &str,
        default_value: impl Into<ArgValue>,
        required: bool,
    ) -> Result<(), Error> {
        self.register(
            aliases,
            description,
            default_value.into().to_text(),
            required,
            false,
        )
    }

    /// Register a boolean flag: presence alone sets it true, no value
    /// token is consumed.
    pub fn register_flag(
        &mut self,
        aliases: &[&str],
        description: &str,
        default_value: bool,
        required: bool,
    ) -> Result<(), Error> {
        self.register(
            aliases,
            description,
            default_value.to_string(),
            required,
            true,
        )
    }

    fn register(
        &mut self,
        aliases: &[&str],
        description: &str,
        default_text: String,
        required: bool,
        is_flag: bool,
    ) -> Result<(), Error> {
        let taken: Vec<&str> = aliases
            .iter()
            .copied()
            .filter(|a| self.lookup.contains_key(*a))
            .collect();
        if !taken.is_empty() {
            for alias in &taken {
                self.report(ErrorKind::DuplicateDefinition, alias);
            }
            return Err(Error::new(ErrorKind::DuplicateDefinition, taken.join(" ")));
        }

        let idx = self.defs.len();
        let mut unique: Vec<String> = Vec::with_capacity(aliases.len());
        for alias in aliases {
            if unique.iter().any(|a| a == alias) {
                continue;
            }
            unique.push((*alias).to_string());
            self.lookup.insert((*alias).to_string(), idx);
        }
        trace!(aliases = %unique.join(" "), is_flag, required, "registered definition");

        self.defs.push(ArgDef {
            aliases: unique,
            description: description.to_string(),
            value: default_text.clone(),
            default_text,
            satisfied: required.then_some(false),
            is_flag,
        });
        Ok(())
    }

    /// Scan the argument vector once.
    ///
    /// The first token is taken as the program name and never matched
    /// against definitions. Exactly one parse per instance is meaningful;
    /// there is no reset.
    pub fn parse<I, S>(&mut self, tokens: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if let Some(name) = tokens.first() {
            self.program_name = name.clone();
        }

        let mut i = 1;
        while i < tokens.len() {
            let token = tokens[i].as_str();

            if self.auto_help && (token == "-h" || token == "--help") {
                debug!("help alias matched, printing listing");
                print!("{}", help::render(&self.program_name, &self.defs));
                if let Some(cb) = &self.post_help_cb {
                    cb();
                }
                i += 1;
                continue;
            }

            let Some(&idx) = self.lookup.get(token) else {
                trace!(token, "unmatched token");
                self.unmatched.push(token.to_string());
                i += 1;
                continue;
            };

            if self.defs[idx].is_flag {
                self.defs[idx].value = "true".to_string();
                self.mark_satisfied(idx);
                i += 1;
                continue;
            }

            // Value-consuming option: the next token is taken verbatim.
            let Some(value) = tokens.get(i + 1) else {
                return Err(self.report(ErrorKind::ExpectedValue, token));
            };
            self.defs[idx].value = value.clone();
            self.mark_satisfied(idx);
            i += 2;
        }

        // First unmet requirement, in registration order, aborts.
        for def in &self.defs {
            if def.satisfied == Some(false) {
                let joined = def.aliases.join(" ");
                return Err(self.report(ErrorKind::MissingRequiredArgument, &joined));
            }
        }
        Ok(())
    }

    /// Retrieve an alias's current value re-parsed as `T`.
    ///
    /// Returns `None` if the alias was never registered, or if the stored
    /// text does not read as `T` — the latter is also reported through
    /// the error callback as [`ErrorKind::IncorrectArgumentType`].
    pub fn get<T: FromArgText>(&self, alias: &str) -> Option<T> {
        let idx = *self.lookup.get(alias)?;
        let text = self.defs[idx].value.as_str();
        match T::from_arg_text(text) {
            Some(value) => Some(value),
            None => {
                self.report(ErrorKind::IncorrectArgumentType, alias);
                None
            }
        }
    }

    /// Tokens seen during the scan that matched no registered alias, in
    /// their original relative order. Never a parse failure by themselves.
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// The program name captured from the first parsed token.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Render the help listing without printing it.
    pub fn render_help(&self) -> String {
        help::render(&self.program_name, &self.defs)
    }

    fn mark_satisfied(&mut self, idx: usize) {
        if self.defs[idx].satisfied.is_some() {
            self.defs[idx].satisfied = Some(true);
        }
    }

    fn report(&self, kind: ErrorKind, context: &str) -> Error {
        debug!(%kind, context, "reporting error");
        if let Some(cb) = &self.error_cb {
            cb(kind, context);
        }
        Error::new(kind, context)
    }
}
