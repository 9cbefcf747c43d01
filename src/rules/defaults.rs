//! Tables compiled into the binary. `RuleTables::default()` is built from them.

use phf::{phf_map, phf_set};

/// Whole-domain misspellings.
pub(crate) static TYPO_DOMAINS: phf::Map<&'static str, &'static str> = phf_map! {
    // gmail
    "gmai.com" => "gmail.com",
    "gmial.com" => "gmail.com",
    "gmal.com" => "gmail.com",
    "gamil.com" => "gmail.com",
    "gnail.com" => "gmail.com",
    "gmaill.com" => "gmail.com",
    "gmail.co" => "gmail.com",
    "gmail.cm" => "gmail.com",
    // yahoo
    "yahooo.com" => "yahoo.com",
    "yaho.com" => "yahoo.com",
    "yahho.com" => "yahoo.com",
    "yhaoo.com" => "yahoo.com",
    // hotmail
    "hotmial.com" => "hotmail.com",
    "hotmal.com" => "hotmail.com",
    "hotmai.com" => "hotmail.com",
    "homail.com" => "hotmail.com",
    "hotmil.com" => "hotmail.com",
    // outlook
    "outlok.com" => "outlook.com",
    "outloo.com" => "outlook.com",
    "outllok.com" => "outlook.com",
    "otlook.com" => "outlook.com",
    // icloud / proton
    "iclod.com" => "icloud.com",
    "icoud.com" => "icloud.com",
    "protonmial.com" => "protonmail.com",
    "protonmai.com" => "protonmail.com",
};

/// Top-level-domain misspellings, keyed without the leading dot.
pub(crate) static TYPO_TLDS: phf::Map<&'static str, &'static str> = phf_map! {
    "cmo" => "com",
    "ocm" => "com",
    "con" => "com",
    "comm" => "com",
    "coom" => "com",
    "ent" => "net",
    "nte" => "net",
    "nett" => "net",
    "rog" => "org",
    "ogr" => "org",
    "orgg" => "org",
};

pub(crate) static FREE_DOMAINS: phf::Set<&'static str> = phf_set! {
    "gmail.com",
    "googlemail.com",
    "yahoo.com",
    "yahoo.fr",
    "yahoo.co.uk",
    "ymail.com",
    "hotmail.com",
    "hotmail.fr",
    "hotmail.co.uk",
    "outlook.com",
    "outlook.fr",
    "live.com",
    "msn.com",
    "aol.com",
    "icloud.com",
    "me.com",
    "mac.com",
    "protonmail.com",
    "proton.me",
    "pm.me",
    "gmx.com",
    "gmx.de",
    "gmx.net",
    "web.de",
    "mail.com",
    "zoho.com",
    "yandex.com",
    "yandex.ru",
    "mail.ru",
    "orange.fr",
    "free.fr",
    "laposte.net",
    "qq.com",
    "163.com",
    "fastmail.com",
    "tutanota.com",
};

pub(crate) static DISPOSABLE_DOMAINS: phf::Set<&'static str> = phf_set! {
    "10minutemail.com",
    "10minutemail.net",
    "20minutemail.com",
    "guerrillamail.com",
    "guerrillamail.net",
    "guerrillamail.org",
    "sharklasers.com",
    "mailinator.com",
    "mailinator.net",
    "tempmail.com",
    "temp-mail.org",
    "tempmail.net",
    "throwawaymail.com",
    "yopmail.com",
    "yopmail.fr",
    "trashmail.com",
    "trashmail.net",
    "getnada.com",
    "dispostable.com",
    "maildrop.cc",
    "mintemail.com",
    "fakeinbox.com",
    "mohmal.com",
    "emailondeck.com",
    "mytemp.email",
    "burnermail.io",
    "spamgourmet.com",
    "mailnesia.com",
};
