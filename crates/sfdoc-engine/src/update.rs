//! Header field updater
//!
//! Rewrites the values of username- and date-backed properties in place,
//! matching header lines by property name across the whole document text.
//! The rewrite is line-oriented and never re-renders the header, so manual
//! edits to other properties survive every save.

use regex::Regex;
use sfdoc_foundation::model::HeaderProperty;
use tracing::debug;

use crate::template::StampContext;

/// Rewrite every dynamic property line in `text` with the current stamp
/// values.
///
/// Properties whose value is not exactly `$username` or `$date` are left
/// alone; so are documents that carry no matching line. The save path
/// never fails here.
pub fn update_dynamic_fields(
    text: &str,
    properties: &[HeaderProperty],
    ctx: &StampContext<'_>,
) -> String {
    let mut updated = text.to_string();

    for property in properties {
        let replacement = if property.is_username_backed() {
            ctx.username
        } else if property.is_date_backed() {
            ctx.date.as_str()
        } else {
            continue;
        };

        let pattern = format!(r"(?im)^(\s*[*\s]*@{}\s*:).*", regex::escape(&property.name));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(error) => {
                debug!(property = %property.name, %error, "Field pattern did not compile, skipping");
                continue;
            }
        };

        // Closure replacement keeps `$` in usernames literal.
        updated = re
            .replace_all(&updated, |caps: &regex::Captures<'_>| {
                format!("{} {}", &caps[1], replacement)
            })
            .into_owned();
    }

    updated
}
