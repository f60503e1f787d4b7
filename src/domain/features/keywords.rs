//! Substring lists used by the keyword features.
//!
//! Both lists are matched case-sensitively against the normalized
//! (lowercased) URL. Entries with uppercase letters therefore never match;
//! they stay because the model was trained with these exact lists.

/// Known link-shortening services. Duplicates are intentional.
pub const SHORTENING_SERVICES: &[&str] = &[
    "bit.ly",
    "goo.gl",
    "shorte.st",
    "go2l.ink",
    "x.co",
    "ow.ly",
    "t.co",
    "tinyurl",
    "tr.im",
    "is.gd",
    "cli.gs",
    "yfrog.com",
    "migre.me",
    "ff.im",
    "tiny.cc",
    "url4.eu",
    "twit.ac",
    "su.pr",
    "twurl.nl",
    "snipurl.com",
    "short.to",
    "BudURL.com",
    "ping.fm",
    "post.ly",
    "Just.as",
    "bkite.com",
    "snipr.com",
    "fic.kr",
    "loopt.us",
    "doiop.com",
    "short.ie",
    "kl.am",
    "wp.me",
    "rubyurl.com",
    "om.ly",
    "to.ly",
    "bit.do",
    "t.co",
    "lnkd.in",
    "db.tt",
    "qr.ae",
    "adf.ly",
    "goo.gl",
    "bitly.com",
    "cur.lv",
    "tinyurl.com",
    "ow.ly",
    "bit.ly",
    "ity.im",
    "q.gs",
    "is.gd",
    "po.st",
    "bc.vc",
    "twitthis.com",
    "u.to",
    "j.mp",
    "buzurl.com",
    "cutt.us",
    "u.bb",
    "yourls.org",
    "x.co",
    "prettylinkpro.com",
    "scrnch.me",
    "filoops.info",
    "vzturl.com",
    "qr.net",
    "1url.com",
    "tweez.me",
    "v.gd",
    "tr.im",
    "link.zip.net",
];

/// Words common in credential-harvesting and scam URLs.
pub const SUSPICIOUS_WORDS: &[&str] = &[
    "PayPal",
    "login",
    "signin",
    "bank",
    "account",
    "update",
    "free",
    "lucky",
    "service",
    "bonus",
    "ebayisapi",
    "webscr",
];

/// Returns `true` if `haystack` contains any entry of `needles`.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
