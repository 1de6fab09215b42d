use crate::conf::error::ConfigError;
use std::fmt;
use std::time::Duration;

/// Transport used to reach a discovery endpoint.
///
/// Documents carry this as an integer (`0` for gRPC, `1` for HTTP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiType {
    Grpc = 0,
    Http = 1,
}

impl ApiType {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ApiType {
    type Error = ConfigError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Grpc),
            1 => Ok(Self::Http),
            other => Err(ConfigError::InvalidEnum {
                field: "api_type",
                value: other,
            }),
        }
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grpc => f.write_str("GRPC"),
            Self::Http => f.write_str("HTTP"),
        }
    }
}

/// Parses a duration string such as `"60s"`, `"1m30s"`, `"250ms"` or `"1.5h"`.
///
/// Accepted units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare `"0"`
/// is the only value allowed without a unit. Negative durations are rejected.
pub fn parse_duration(field: &str, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidDuration {
        field: field.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let s = raw.trim();
    if s.is_empty() {
        return Err(invalid("duration is empty"));
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_end == 0 {
            return Err(invalid("expected a number"));
        }
        let (number, tail) = rest.split_at(number_end);
        let value: f64 = number
            .parse()
            .map_err(|_| invalid("malformed number"))?;

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);
        let nanos_per_unit = match unit {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            "" => return Err(invalid("missing unit")),
            _ => return Err(invalid("unknown unit")),
        };

        // The cast below saturates, so range-check before it.
        let nanos = (value * nanos_per_unit).round();
        if !nanos.is_finite() || nanos >= u64::MAX as f64 {
            return Err(invalid("duration out of range"));
        }
        total = total
            .checked_add(Duration::from_nanos(nanos as u64))
            .ok_or_else(|| invalid("duration out of range"))?;
        rest = tail;
    }

    Ok(total)
}
