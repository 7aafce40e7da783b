#![doc = include_str!("../README.md")]

mod line;
pub use line::fields;

mod types;
pub use types::TypeTag;

mod flags;
pub use flags::{Encryption, FlagSet};

mod vendor;
pub use vendor::{UnknownVendor, VendorScope};

mod emit;
pub use emit::Statement;

mod translate;
pub use translate::{SkippedLine, Summary, TranslateError, translate};
