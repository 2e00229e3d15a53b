//! The TLD acceptance set backing the link recognizer's `fragment()` scan
//! (§4.9's `ValidTLD` bit). A curated subset of real top-level domains,
//! lowercase ASCII, large enough to exercise the generic/ccTLD split the
//! scenarios in the spec rely on (`ok.ru`, `a.co`) without vendoring the
//! full IANA list, which this crate explicitly treats as external static
//! data (§1's "out of scope: static data tables").

use std::collections::HashSet;

use lazy_static::lazy_static;

const TLDS: &[&str] = &[
    "com", "net", "org", "info", "biz", "name", "pro", "xyz", "online", "site", "tech", "store",
    "club", "app", "dev", "io", "co", "me", "cc", "tv", "gg", "ai", "shop", "blog", "life", "news",
    "edu", "gov", "mil", "int",
    "ru", "su", "рф", "ua", "by", "kz", "uk", "de", "fr", "it", "es", "pl", "nl", "se", "no", "fi",
    "dk", "ch", "at", "be", "cz", "gr", "pt", "ie", "tr",
    "us", "ca", "mx", "br", "ar", "cl",
    "cn", "jp", "kr", "in", "id", "vn", "th", "sg", "hk", "tw",
    "au", "nz",
];

lazy_static! {
    pub static ref TLD_SET: HashSet<&'static str> = TLDS.iter().copied().collect();
}

pub fn is_valid_tld(label: &str) -> bool {
    TLD_SET.contains(label.to_lowercase().as_str())
}
