//! Vendor scope tracking for `VENDOR` / `BEGIN-VENDOR` / `END-VENDOR`.

use std::fmt;

/// The most recently declared vendor and whether its VSA scope is open.
///
/// At most one scope is open at a time; the dictionary format has no
/// nested vendor scopes. A fresh tracker starts idle with no vendor
/// declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorScope {
    name: String,
    id: u32,
    active: bool,
}

/// A `BEGIN-VENDOR` or `END-VENDOR` directive naming a vendor other than
/// the most recently declared one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVendor(pub String);

impl fmt::Display for UnknownVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown vendor {}", self.0)
    }
}

impl std::error::Error for UnknownVendor {}

impl VendorScope {
    /// Record a `VENDOR <name> <id>` declaration.
    ///
    /// Declaring does not open the scope; a later `BEGIN-VENDOR` does.
    pub fn declare(&mut self, name: &str, id: u32) {
        self.name = name.to_string();
        self.id = id;
    }

    /// Open the VSA scope for `name`, which must match the declaration.
    pub fn begin(&mut self, name: &str) -> Result<(), UnknownVendor> {
        if name != self.name {
            return Err(UnknownVendor(name.to_string()));
        }
        self.active = true;
        Ok(())
    }

    /// Close the VSA scope for `name` and return to the idle state.
    ///
    /// The declaration is forgotten too: re-opening the same vendor later
    /// requires a fresh `VENDOR` line first.
    pub fn end(&mut self, name: &str) -> Result<(), UnknownVendor> {
        if name != self.name {
            return Err(UnknownVendor(name.to_string()));
        }
        self.name.clear();
        self.id = 0;
        self.active = false;
        Ok(())
    }

    /// The vendor id attributes are currently scoped under, if any.
    pub fn active_id(&self) -> Option<u32> {
        self.active.then_some(self.id)
    }

    /// True when no vendor is declared and no scope is open.
    pub fn is_idle(&self) -> bool {
        !self.active && self.name.is_empty() && self.id == 0
    }
}
