//! Attribute flag parsing: tag support and encryption kinds.

/// Password-obfuscation scheme associated with an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encryption {
    /// No obfuscation.
    #[default]
    None,
    /// User-Password style (`encrypt=1`).
    UserPassword,
    /// Tunnel-Password style (`encrypt=2`).
    TunnelPassword,
    /// Ascend-Send-Secret style (`encrypt=3`).
    Ascend,
}

impl Encryption {
    /// The identifier this kind renders as in emitted statements.
    pub fn ident(self) -> &'static str {
        match self {
            Encryption::None => "AttrEncNone",
            Encryption::UserPassword => "AttrEncUsr",
            Encryption::TunnelPassword => "AttrEncTun",
            Encryption::Ascend => "AttrEncAsc",
        }
    }
}

/// The parsed flags field of an attribute record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagSet {
    /// True iff at least one recognized flag token was present.
    pub used: bool,
    /// The attribute supports tagged instances.
    pub has_tag: bool,
    /// Encryption scheme; [`Encryption::None`] when no `encrypt=` token
    /// was given.
    pub encryption: Encryption,
}

impl FlagSet {
    /// Parse a comma-separated flags field.
    ///
    /// Unrecognized tokens are ignored for forward compatibility, and a
    /// repeated token of the same category is last-wins. Dictionaries in
    /// practice supply at most one `has_tag` and one `encrypt=`.
    pub fn parse(raw: &str) -> Self {
        let mut set = FlagSet::default();
        for token in raw.to_ascii_lowercase().split(',') {
            match token {
                "has_tag" => {
                    set.used = true;
                    set.has_tag = true;
                }
                "encrypt=1" => {
                    set.used = true;
                    set.encryption = Encryption::UserPassword;
                }
                "encrypt=2" => {
                    set.used = true;
                    set.encryption = Encryption::TunnelPassword;
                }
                "encrypt=3" => {
                    set.used = true;
                    set.encryption = Encryption::Ascend;
                }
                _ => {}
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_recognized_token_is_unused() {
        assert_eq!(FlagSet::parse("concat"), FlagSet::default());
        assert_eq!(FlagSet::parse(""), FlagSet::default());
        assert_eq!(FlagSet::parse("internal,virtual"), FlagSet::default());
    }

    #[test]
    fn test_has_tag() {
        let set = FlagSet::parse("has_tag");
        assert!(set.used);
        assert!(set.has_tag);
        assert_eq!(set.encryption, Encryption::None);
    }

    #[test]
    fn test_encrypt_kinds() {
        assert_eq!(FlagSet::parse("encrypt=1").encryption, Encryption::UserPassword);
        assert_eq!(FlagSet::parse("encrypt=2").encryption, Encryption::TunnelPassword);
        assert_eq!(FlagSet::parse("encrypt=3").encryption, Encryption::Ascend);
        assert!(FlagSet::parse("encrypt=1").used);
        assert!(!FlagSet::parse("encrypt=1").has_tag);
    }

    #[test]
    fn test_unknown_encrypt_value_ignored() {
        assert_eq!(FlagSet::parse("encrypt=4"), FlagSet::default());
    }

    #[test]
    fn test_token_order_is_irrelevant() {
        let a = FlagSet::parse("encrypt=2,has_tag");
        let b = FlagSet::parse("has_tag,encrypt=2");
        assert_eq!(a, b);
        assert!(a.used);
        assert!(a.has_tag);
        assert_eq!(a.encryption, Encryption::TunnelPassword);
    }

    #[test]
    fn test_case_insensitive_tokens() {
        assert!(FlagSet::parse("HAS_TAG").has_tag);
        assert_eq!(FlagSet::parse("Encrypt=2").encryption, Encryption::TunnelPassword);
    }

    #[test]
    fn test_repeated_encrypt_last_wins() {
        assert_eq!(FlagSet::parse("encrypt=1,encrypt=3").encryption, Encryption::Ascend);
    }

    #[test]
    fn test_unknown_tokens_mixed_with_known() {
        let set = FlagSet::parse("concat,has_tag,future=yes");
        assert!(set.used);
        assert!(set.has_tag);
        assert_eq!(set.encryption, Encryption::None);
    }
}
