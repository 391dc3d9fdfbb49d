//! Value parsers for clap arguments

use graphwalk_core::format::OutputFormat;
use graphwalk_core::traversal::Algorithm;

pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

pub fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse an edge given as `U,V` (or `U-V` when neither name contains a dash)
pub fn parse_edge(s: &str) -> Result<(String, String), String> {
    let (u, v) = s
        .split_once(',')
        .or_else(|| s.split_once('-'))
        .ok_or_else(|| format!("invalid edge '{}' (expected FROM,TO)", s))?;

    let (u, v) = (u.trim(), v.trim());
    if u.is_empty() || v.is_empty() {
        return Err(format!("invalid edge '{}' (vertex names must not be empty)", s));
    }
    Ok((u.to_string(), v.to_string()))
}
