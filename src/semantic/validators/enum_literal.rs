//! Enumerator literal validation.
//!
//! Enumerator values are written as decimal, binary (`0b`), hexadecimal
//! (`0x`) or octal (leading `0`) literals. Classification works over the
//! lower-cased text, first failing rule wins, and a literal that is valid
//! under its inferred base produces nothing.

use crate::model::EnumerationType;
use crate::semantic::diagnostics::{Diagnostic, DiagnosticSink, codes};

/// Why a literal was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralIssue {
    MissingValue,
    NotANumber,
    NotBinary,
    NotHexadecimal,
    NotOctal,
    NotDecimal,
}

impl LiteralIssue {
    pub fn message(&self) -> &'static str {
        match self {
            LiteralIssue::MissingValue => "Missing value!",
            LiteralIssue::NotANumber => "Not a valid number!",
            LiteralIssue::NotBinary => "Not a valid number! Should be binary",
            LiteralIssue::NotHexadecimal => "Not a valid number! Should be hexadecimal",
            LiteralIssue::NotOctal => "Not a valid number! Should be octal",
            LiteralIssue::NotDecimal => "Not a valid number! Should be decimal",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LiteralIssue::MissingValue => codes::MISSING_ENUMERATOR_VALUE,
            _ => codes::MALFORMED_ENUMERATOR_VALUE,
        }
    }
}

/// Classify one enumerator literal. `None` means the literal is valid.
pub fn classify_literal(text: &str) -> Option<LiteralIssue> {
    let value = text.to_ascii_lowercase();
    let bytes = value.as_bytes();

    if bytes.is_empty() {
        return Some(LiteralIssue::MissingValue);
    }

    if bytes.len() == 1 {
        if bytes[0].is_ascii_digit() {
            return None;
        }
        return Some(LiteralIssue::NotANumber);
    }

    if bytes.len() > 2 && value.starts_with("0b") {
        if bytes[2..].iter().all(|b| *b == b'0' || *b == b'1') {
            return None;
        }
        return Some(LiteralIssue::NotBinary);
    }

    if bytes.len() > 2 && value.starts_with("0x") {
        if bytes[2..]
            .iter()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b))
        {
            return None;
        }
        return Some(LiteralIssue::NotHexadecimal);
    }

    if bytes[0] == b'0' {
        if bytes[1..].iter().all(|b| (b'0'..=b'7').contains(b)) {
            return None;
        }
        return Some(LiteralIssue::NotOctal);
    }

    if bytes.iter().all(u8::is_ascii_digit) {
        None
    } else {
        Some(LiteralIssue::NotDecimal)
    }
}

/// Check every enumerator of one enumeration. Enumerators without a value
/// are skipped; an explicitly empty value warns.
pub fn check_enumeration(
    enumeration: &EnumerationType,
    file: &str,
    sink: &mut dyn DiagnosticSink,
) {
    for (position, enumerator) in enumeration.enumerators.iter().enumerate() {
        let Some(value) = &enumerator.value else {
            continue;
        };
        if let Some(issue) = classify_literal(value) {
            sink.accept(
                Diagnostic::warning(file, issue.message())
                    .with_feature(enumerator.name.clone())
                    .with_index(position)
                    .with_code(issue.code()),
            );
        }
    }
}
