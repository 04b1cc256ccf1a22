use std::fmt;
use std::str::FromStr;

use crate::error::RequestLineError;

use super::catalog::{ArgKind, COUNTRIES, FunctionSignature, ZONE_MAX, ZONE_MIN, lookup};

const ZONE_PREFIX: &str = "Zone:";

/// A single argument value of a request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgValue {
    Country(&'static str),
    Int(u32),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Country(name) => f.write_str(name),
            ArgValue::Int(value) => write!(f, "{}", value),
        }
    }
}

/// One synthesized request: function name, arguments in signature order, and
/// the zone tag. Rendered with `Display` as the exact workload line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    signature: FunctionSignature,
    args: Vec<ArgValue>,
    zone: Option<u8>,
}

impl RequestLine {
    pub(super) const fn new(
        signature: FunctionSignature,
        args: Vec<ArgValue>,
        zone: Option<u8>,
    ) -> Self {
        Self {
            signature,
            args,
            zone,
        }
    }

    #[must_use]
    pub const fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.signature.name
    }

    #[must_use]
    pub fn args(&self) -> &[ArgValue] {
        &self.args
    }

    #[must_use]
    pub const fn zone(&self) -> Option<u8> {
        self.zone
    }

    #[must_use]
    pub const fn token_count(&self) -> usize {
        self.signature.token_count()
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        if let Some(zone) = self.zone {
            write!(f, " {}{}", ZONE_PREFIX, zone)?;
        }
        Ok(())
    }
}

impl FromStr for RequestLine {
    type Err = RequestLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let (name, rest) = tokens.split_first().ok_or(RequestLineError::Empty)?;
        let signature = lookup(name).ok_or_else(|| RequestLineError::UnknownFunction {
            name: (*name).to_owned(),
        })?;
        if tokens.len() != signature.token_count() {
            return Err(RequestLineError::TokenCount {
                function: signature.name,
                expected: signature.token_count(),
                actual: tokens.len(),
            });
        }

        let (arg_tokens, zone_tokens) = rest.split_at(signature.args.len());
        let mut args = Vec::with_capacity(signature.args.len());
        for (kind, token) in signature.args.iter().zip(arg_tokens) {
            args.push(parse_arg(*kind, token)?);
        }
        let zone = match zone_tokens.first() {
            Some(token) => Some(parse_zone(token)?),
            None => None,
        };

        Ok(RequestLine::new(*signature, args, zone))
    }
}

fn parse_arg(kind: ArgKind, token: &str) -> Result<ArgValue, RequestLineError> {
    let invalid = || RequestLineError::InvalidArgument {
        kind,
        value: token.to_owned(),
    };
    match kind.int_range() {
        None => COUNTRIES
            .iter()
            .copied()
            .find(|country| *country == token)
            .map(ArgValue::Country)
            .ok_or_else(invalid),
        Some((min, max)) => {
            let value = parse_digits(token).ok_or_else(invalid)?;
            if (min..=max).contains(&value) {
                Ok(ArgValue::Int(value))
            } else {
                Err(invalid())
            }
        }
    }
}

fn parse_zone(token: &str) -> Result<u8, RequestLineError> {
    let invalid = || RequestLineError::InvalidZone {
        value: token.to_owned(),
    };
    let digits = token.strip_prefix(ZONE_PREFIX).ok_or_else(invalid)?;
    let zone = parse_digits(digits)
        .and_then(|value| u8::try_from(value).ok())
        .ok_or_else(invalid)?;
    if (ZONE_MIN..=ZONE_MAX).contains(&zone) {
        Ok(zone)
    } else {
        Err(invalid())
    }
}

/// Plain decimal digits only; rejects signs and whitespace that `u32::from_str`
/// would otherwise accept.
fn parse_digits(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
