//! End-to-end translation tests over a realistic dictionary excerpt.

use raddict_parse::{Summary, translate};

fn run(source: &str) -> (String, Summary) {
    let mut out = Vec::new();
    let summary = translate(source, &mut out).expect("dictionary should translate");
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn test_standard_attributes_excerpt() {
    let source = r"# -*- text -*-
# Standard attributes, RFC 2865 / RFC 2868 excerpt.
ATTRIBUTE
User-Name             1   string
User-Password         2   string   rfc2865  encrypt=1
CHAP-Password         3   octets
NAS-IP-Address        4   ipaddr
NAS-Port              5   integer
Tunnel-Type           64  integer  rfc2868  has_tag
Tunnel-Password       69  string   rfc2868  has_tag,encrypt=2
Event-Timestamp       55  date
Framed-Interface-Id   96  ifid
";
    let (out, summary) = run(source);
    insta::assert_snapshot!(out, @r#"
    MustAddAttr("User-Name", 1, DTypeString)
    MustAddAttrEnc("User-Password", 2, DTypeString, AttrEncUsr)
    MustAddAttr("CHAP-Password", 3, DTypeRaw)
    MustAddAttr("NAS-IP-Address", 4, DTypeIP4)
    MustAddAttr("NAS-Port", 5, DTypeInt)
    MustAddAttrEncTag("Tunnel-Type", 64, DTypeInt, AttrEncNone)
    MustAddAttrEncTag("Tunnel-Password", 69, DTypeString, AttrEncTun)
    MustAddAttr("Event-Timestamp", 55, DTypeTime)
    MustAddAttr("Framed-Interface-Id", 96, DTypeIfID)
    "#);
    assert_eq!(summary.emitted, 9);
    assert!(summary.skipped.is_empty());
}

#[test]
fn test_vendor_block_excerpt() {
    let source = r"VENDOR Ascend 529
BEGIN-VENDOR Ascend
Ascend-Send-Secret   214  string  ascend  encrypt=3
Ascend-Data-Filter   242  abinary
END-VENDOR Ascend

VENDOR Cisco 9
BEGIN-VENDOR Cisco
Cisco-AVPair         1    string
END-VENDOR Cisco

Acct-Status-Type     40   integer
";
    let (out, summary) = run(source);
    insta::assert_snapshot!(out, @r#"
    MustAddVSAEnc("Ascend-Send-Secret", 529, 214, DTypeString, AttrEncAsc)
    MustAddVSA("Ascend-Data-Filter", 529, 242, DTypeRaw)
    MustAddVSA("Cisco-AVPair", 9, 1, DTypeString)
    MustAddAttr("Acct-Status-Type", 40, DTypeInt)
    "#);
    assert_eq!(summary.emitted, 4);
}

#[test]
fn test_skipped_lines_do_not_stop_the_run() {
    let source = r"Good-Before     1    string
Bad-Code        300  string
Good-After      2    integer
";
    let (out, summary) = run(source);
    insta::assert_snapshot!(out, @r#"
    MustAddAttr("Good-Before", 1, DTypeString)
    MustAddAttr("Good-After", 2, DTypeInt)
    "#);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].line, 2);
    assert_eq!(
        summary.skipped[0].to_string(),
        "line 2: attribute code `300` is not an unsigned 8-bit integer; line skipped"
    );
}

#[test]
fn test_fatal_abort_reports_line() {
    let mut out = Vec::new();
    let err = translate("VENDOR Acme 999\nBEGIN-VENDOR Typo\n", &mut out).unwrap_err();
    assert_eq!(err.to_string(), "line 2: unknown vendor Typo");
}
