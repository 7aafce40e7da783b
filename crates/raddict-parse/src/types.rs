//! Dictionary type keywords and their registry type tags.

/// The canonical data type an attribute is registered with.
///
/// Rendered as the `DType*` identifier of the target registry API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Untyped byte data: `octets`, `abinary`, and every unknown keyword.
    Raw,
    /// `byte`
    Byte,
    /// `combo-ip` (IPv4 or IPv6 depending on payload length)
    ComboIp,
    /// `date`
    Time,
    /// `ether`
    Ether,
    /// `extended`
    Extended,
    /// `ifid`
    IfId,
    /// `integer`
    Int,
    /// `integer64`
    Int64,
    /// `ipaddr`
    Ip4,
    /// `ipv4prefix`
    Ip4Prefix,
    /// `ipv6addr`
    Ip6,
    /// `ipv6prefix`
    Ip6Prefix,
    /// `long-extended`
    LongExtended,
    /// `short`
    Short,
    /// `signed`
    Signed,
    /// `string`
    String,
    /// `tlv`
    Tlv,
    /// `vsa`
    Vsa,
}

impl TypeTag {
    /// Map a raw dictionary type keyword to its tag.
    ///
    /// Array-length decorations (`octets[4]`) are truncated at the first
    /// bracket and matching is case-insensitive. Anything unrecognized
    /// degrades to [`TypeTag::Raw`] rather than erroring, so future
    /// dictionary keywords fall back to untyped byte data.
    pub fn from_keyword(raw: &str) -> Self {
        let keyword = match raw.find(['[', ']']) {
            Some(at) => &raw[..at],
            None => raw,
        };
        match keyword.to_ascii_lowercase().as_str() {
            "abinary" => TypeTag::Raw,
            "byte" => TypeTag::Byte,
            "combo-ip" => TypeTag::ComboIp,
            "date" => TypeTag::Time,
            "ether" => TypeTag::Ether,
            "extended" => TypeTag::Extended,
            "ifid" => TypeTag::IfId,
            "integer" => TypeTag::Int,
            "integer64" => TypeTag::Int64,
            "ipaddr" => TypeTag::Ip4,
            "ipv4prefix" => TypeTag::Ip4Prefix,
            "ipv6addr" => TypeTag::Ip6,
            "ipv6prefix" => TypeTag::Ip6Prefix,
            "long-extended" => TypeTag::LongExtended,
            "octets" => TypeTag::Raw,
            "short" => TypeTag::Short,
            "signed" => TypeTag::Signed,
            "string" => TypeTag::String,
            "tlv" => TypeTag::Tlv,
            "vsa" => TypeTag::Vsa,
            _ => TypeTag::Raw,
        }
    }

    /// The identifier this tag renders as in emitted statements.
    pub fn ident(self) -> &'static str {
        match self {
            TypeTag::Raw => "DTypeRaw",
            TypeTag::Byte => "DTypeByte",
            TypeTag::ComboIp => "DTypeIP",
            TypeTag::Time => "DTypeTime",
            TypeTag::Ether => "DTypeEth",
            TypeTag::Extended => "DTypeEXT",
            TypeTag::IfId => "DTypeIfID",
            TypeTag::Int => "DTypeInt",
            TypeTag::Int64 => "DTypeInt64",
            TypeTag::Ip4 => "DTypeIP4",
            TypeTag::Ip4Prefix => "DTypeIP4Pfx",
            TypeTag::Ip6 => "DTypeIP6",
            TypeTag::Ip6Prefix => "DTypeIP6Pfx",
            TypeTag::LongExtended => "DTypeLongEXT",
            TypeTag::Short => "DTypeShort",
            TypeTag::Signed => "DTypeSInt",
            TypeTag::String => "DTypeString",
            TypeTag::Tlv => "DTypeTLV",
            TypeTag::Vsa => "DTypeVSA",
        }
    }
}
