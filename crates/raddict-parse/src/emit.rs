//! Rendering of registration statements.

use std::fmt;

use crate::{FlagSet, TypeTag};

/// One registration statement for the target attribute-registry API.
///
/// Displays as exactly one of six `MustAdd*` shapes, selected by whether a
/// vendor scope was active when the attribute was parsed and by the parsed
/// flags. Rendering is pure formatting: no deduplication and no validation
/// against previously emitted statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    name: &'a str,
    code: u8,
    ty: TypeTag,
    flags: FlagSet,
    vendor: Option<u32>,
}

impl<'a> Statement<'a> {
    /// Build a statement; `vendor` carries the id of the open VSA scope,
    /// if any.
    pub fn new(name: &'a str, code: u8, ty: TypeTag, flags: FlagSet, vendor: Option<u32>) -> Self {
        Self {
            name,
            code,
            ty,
            flags,
            vendor,
        }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            code,
            ty,
            flags,
            vendor,
        } = *self;
        let ty = ty.ident();
        let enc = flags.encryption.ident();
        match (vendor, flags.used, flags.has_tag) {
            (None, false, _) => write!(f, "MustAddAttr(\"{name}\", {code}, {ty})"),
            (None, true, false) => write!(f, "MustAddAttrEnc(\"{name}\", {code}, {ty}, {enc})"),
            (None, true, true) => write!(f, "MustAddAttrEncTag(\"{name}\", {code}, {ty}, {enc})"),
            (Some(vid), false, _) => write!(f, "MustAddVSA(\"{name}\", {vid}, {code}, {ty})"),
            (Some(vid), true, false) => {
                write!(f, "MustAddVSAEnc(\"{name}\", {vid}, {code}, {ty}, {enc})")
            }
            (Some(vid), true, true) => {
                write!(f, "MustAddVSAEncTag(\"{name}\", {vid}, {code}, {ty}, {enc})")
            }
        }
    }
}
