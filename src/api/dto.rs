//! Data Transfer Objects for API requests and responses.
//!
//! The wire shapes here are the service's public contract:
//! `{"input": ..., "output": ...}` for a single conversion and
//! `{"conversions": [...]}` for a range, with query parameters arriving
//! as raw strings so the conversion core owns all validation.

use serde::{Deserialize, Serialize};

use crate::convert::Conversion;

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameters accepted by `GET /romannumeral`.
///
/// All fields are optional strings: the handler decides which mode the
/// request is in (`query` for a single conversion, `min`+`max` for a
/// range) and the core rejects malformed values. Nothing is coerced at
/// the extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct RomanNumeralQuery {
    /// Single-conversion input. Takes precedence over `min`/`max`.
    pub query: Option<String>,
    /// Lower bound of a range conversion.
    pub min: Option<String>,
    /// Upper bound of a range conversion.
    pub max: Option<String>,
}

// =============================================================================
// Response Bodies
// =============================================================================

/// Response body for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    /// The Arabic input as the caller supplied it.
    pub input: String,
    /// The Roman numeral output.
    pub output: String,
}

/// Response body for a range conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConversionsResponse {
    /// One entry per integer in the requested interval, ascending.
    pub conversions: Vec<ConversionResponse>,
}

impl From<Conversion> for ConversionResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            input: conversion.arabic,
            output: conversion.roman,
        }
    }
}

impl From<Vec<Conversion>> for RangeConversionsResponse {
    fn from(conversions: Vec<Conversion>) -> Self {
        Self {
            conversions: conversions.into_iter().map(ConversionResponse::from).collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
