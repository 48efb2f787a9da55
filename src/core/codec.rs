//! The `export const <name> = <literal>;` codec. This is the only wire
//! format the library speaks: generators wrap data into it, the parser pulls
//! data back out of pasted source text.

use crate::core::literal::LiteralParser;
use crate::utils::error::{HelperError, Result};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Extracts the data literal bound to `var_name` in a block of source text.
///
/// Comment banners before the declaration and anything after the literal
/// (the trailing semicolon, compatibility exports) are ignored. Fails with
/// [`HelperError::Parse`] when the declaration is missing or the bound
/// expression is not a data literal.
pub fn parse_export_data(code: &str, var_name: &str) -> Result<Value> {
    let pattern = format!(r"export\s+const\s+{}\s*=\s*", regex::escape(var_name));
    let declaration = Regex::new(&pattern)
        .map_err(|e| HelperError::Parse {
            message: e.to_string(),
        })?
        .find(code)
        .ok_or_else(|| HelperError::Parse {
            message: format!("no `export const {}` declaration found", var_name),
        })?;

    tracing::debug!("parsing data literal bound to `{}`", var_name);
    LiteralParser::new(&code[declaration.end()..]).parse_value()
}

/// Serializes `data` and wraps it as `export const <name> = <json>;`.
/// 2-space indented when `pretty`, compact otherwise.
///
/// Output round-trips through [`parse_export_data`] for any value that is
/// representable as data; anything serde cannot serialize to JSON is lost at
/// this boundary by design.
pub fn generate_export_code<T: Serialize>(var_name: &str, data: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    Ok(format!("export const {} = {};", var_name, json))
}
