// SPDX-License-Identifier: MPL-2.0
//! Footer copyright line.
//!
//! The static page ships with a hard-coded year; the script patches it with
//! the current one on load.

use crate::i18n::I18n;
use chrono::Datelike;

/// Current year from the local clock.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Localized copyright notice for `owner` and `year`.
#[must_use]
pub fn copyright_notice(i18n: &I18n, owner: &str, year: i32) -> String {
    let year = year.to_string();
    i18n.tr_with_args("footer-copyright", &[("year", year.as_str()), ("owner", owner)])
}
