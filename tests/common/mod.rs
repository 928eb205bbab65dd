#![allow(dead_code)]

use email_builder::prelude::*;

/// Characters far outside the address pattern's character sets.
pub const UNICODE_JUNK: &str = "*$£%ù^¨&é\"'()°-è_çà§æ«€¶ŧ←↓→øþ¨¤@ßðđŋħłµł»¢“";

/// Builds an address from optional parts, `None` meaning the setter is never called.
pub fn assemble(
    user_name: Option<&str>,
    domain: Option<&str>,
    sub_domain: Option<&str>,
    tld: Option<&str>,
) -> String {
    let mut builder = EmailBuilder::builder();

    if let Some(user_name) = user_name {
        builder = builder.user_name(user_name);
    }
    if let Some(domain) = domain {
        builder = builder.domain(domain);
    }
    if let Some(sub_domain) = sub_domain {
        builder = builder.sub_domain(sub_domain);
    }
    if let Some(tld) = tld {
        builder = builder.tld(tld);
    }

    builder.build().email()
}

/// Every combination of the four parts being set or unset.
pub fn all_presence_combinations() -> Vec<[bool; 4]> {
    (0u8..16)
        .map(|mask| {
            [
                mask & 0b0001 != 0,
                mask & 0b0010 != 0,
                mask & 0b0100 != 0,
                mask & 0b1000 != 0,
            ]
        })
        .collect()
}
