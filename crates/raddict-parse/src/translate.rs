//! Single-pass translation of dictionary source text into statements.

use std::fmt;
use std::io;

use tracing::{trace, warn};

use crate::{FlagSet, Statement, TypeTag, VendorScope, fields};

/// Inert marker keyword, kept in the format for forward compatibility.
const ATTRIBUTE: &str = "ATTRIBUTE";
/// Declares a vendor name and id.
const VENDOR: &str = "VENDOR";
/// Opens the vendor-specific attribute scope.
const BEGIN_VENDOR: &str = "BEGIN-VENDOR";
/// Closes the vendor-specific attribute scope.
const END_VENDOR: &str = "END-VENDOR";

/// Outcome of a run that consumed the whole input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of statements written to the sink.
    pub emitted: usize,
    /// Attribute lines dropped over an unparseable code field.
    pub skipped: Vec<SkippedLine>,
}

/// A recoverable per-line diagnostic: the line was dropped, the run went on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based source line number.
    pub line: usize,
    /// The code field that failed to parse as an 8-bit unsigned integer.
    pub code: String,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: attribute code `{}` is not an unsigned 8-bit integer; line skipped",
            self.line, self.code
        )
    }
}

/// Fatal conditions that abort the run.
#[derive(Debug)]
pub enum TranslateError {
    /// `VENDOR` directive with fewer than two arguments.
    MalformedVendor { line: usize },
    /// `BEGIN-VENDOR` or `END-VENDOR` directive without exactly one
    /// argument.
    MalformedScope { keyword: &'static str, line: usize },
    /// Vendor id that does not parse as a 32-bit unsigned integer.
    InvalidVendorId { value: String, line: usize },
    /// `BEGIN-VENDOR` or `END-VENDOR` naming a vendor other than the most
    /// recently declared one.
    UnknownVendor { name: String, line: usize },
    /// The output sink failed.
    Io(io::Error),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::MalformedVendor { line } => {
                write!(f, "line {line}: invalid {VENDOR} directive")
            }
            TranslateError::MalformedScope { keyword, line } => {
                write!(f, "line {line}: invalid {keyword} directive")
            }
            TranslateError::InvalidVendorId { value, line } => {
                write!(f, "line {line}: vendor id `{value}` is not an unsigned 32-bit integer")
            }
            TranslateError::UnknownVendor { name, line } => {
                write!(f, "line {line}: unknown vendor {name}")
            }
            TranslateError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TranslateError {
    fn from(e: io::Error) -> Self {
        TranslateError::Io(e)
    }
}

/// Translate dictionary source text into registration statements.
///
/// One pass, one line at a time. Statements stream to `out` as attribute
/// records are parsed, so output written before a fatal error stays
/// written (the tool is not transactional). Vendor-scope directives mutate
/// the tracker and emit nothing; an attribute code that does not fit
/// 8 bits drops only its own line and is reported in the [`Summary`].
pub fn translate<W: io::Write>(source: &str, out: &mut W) -> Result<Summary, TranslateError> {
    let mut scope = VendorScope::default();
    let mut summary = Summary::default();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let fields = fields(raw);
        let Some(&first) = fields.first() else {
            continue;
        };
        trace!(line, ?fields, "processing directive");
        match first {
            // Inert marker line; trailing fields are ignored.
            ATTRIBUTE => {}
            VENDOR => {
                if fields.len() < 3 {
                    return Err(TranslateError::MalformedVendor { line });
                }
                let id = parse_uint(fields[2], u32::MAX as u64).ok_or_else(|| {
                    TranslateError::InvalidVendorId {
                        value: fields[2].to_string(),
                        line,
                    }
                })?;
                scope.declare(fields[1], id as u32);
            }
            BEGIN_VENDOR => {
                if fields.len() != 2 {
                    return Err(TranslateError::MalformedScope {
                        keyword: BEGIN_VENDOR,
                        line,
                    });
                }
                scope
                    .begin(fields[1])
                    .map_err(|e| TranslateError::UnknownVendor { name: e.0, line })?;
            }
            END_VENDOR => {
                if fields.len() != 2 {
                    return Err(TranslateError::MalformedScope {
                        keyword: END_VENDOR,
                        line,
                    });
                }
                scope
                    .end(fields[1])
                    .map_err(|e| TranslateError::UnknownVendor { name: e.0, line })?;
            }
            name => {
                // A keyword-less line is an attribute record when it has at
                // least name, code, and type; anything shorter is an
                // unrecognized directive and ignored.
                if fields.len() < 3 {
                    continue;
                }
                let Some(code) = parse_uint(fields[1], u8::MAX as u64) else {
                    warn!(line, code = fields[1], "attribute code does not fit 8 bits");
                    summary.skipped.push(SkippedLine {
                        line,
                        code: fields[1].to_string(),
                    });
                    continue;
                };
                let ty = TypeTag::from_keyword(fields[2]);
                // Field 4 is a historical reference column, skipped
                // positionally; field 5 carries the flags.
                let flags = fields.get(4).map(|f| FlagSet::parse(f)).unwrap_or_default();
                let stmt = Statement::new(name, code as u8, ty, flags, scope.active_id());
                writeln!(out, "{stmt}")?;
                summary.emitted += 1;
            }
        }
    }

    Ok(summary)
}

/// Parse an unsigned integer with base-prefix rules: `0x` hex, `0o` octal,
/// `0b` binary, a bare leading `0` octal, decimal otherwise. `None` on
/// syntax errors or values above `max`.
fn parse_uint(s: &str, max: u64) -> Option<u64> {
    let (digits, radix) = if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
    {
        (rest, 16)
    } else if let Some(rest) = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")) {
        (rest, 8)
    } else if let Some(rest) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (rest, 2)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };
    let value = u64::from_str_radix(digits, radix).ok()?;
    (value <= max).then_some(value)
}
