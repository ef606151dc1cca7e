//! Observation loading from a JSON array of records.
//!
//! Each record is an object holding the score and chance fields, either as
//! JSON numbers or as numeric strings. Scores keep only their leading integer
//! part (`"105.7"` reads as 105); chances read the longest leading decimal
//! number (`"0.92 "` reads as 0.92).

use std::fs::File;
use std::io::{BufReader, Read};

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use serde_json::Value;

use crate::chart::Observation;
use crate::config::FieldNames;

/// Read observations from a JSON file.
pub fn load_observations(path: &str, fields: &FieldNames) -> Result<Vec<Observation>> {
    let file = File::open(path).with_context(|| format!("Failed to open data file {}", path))?;
    let observations = read_observations(BufReader::new(file), fields)
        .with_context(|| format!("Failed to read observations from {}", path))?;
    info!("Loaded {} observations from {}", observations.len(), path);
    Ok(observations)
}

/// Read observations from any JSON source, keeping record order.
pub fn read_observations<R: Read>(reader: R, fields: &FieldNames) -> Result<Vec<Observation>> {
    let value: Value = serde_json::from_reader(reader).context("Invalid JSON")?;
    let Value::Array(records) = value else {
        bail!("Expected a JSON array of records");
    };
    if records.is_empty() {
        warn!("Data source contains no records");
    }

    let mut observations = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let Value::Object(map) = record else {
            bail!("Record {} is not an object", i);
        };
        let score = map
            .get(&fields.score)
            .with_context(|| format!("Record {} has no '{}' field", i, fields.score))?;
        let chance = map
            .get(&fields.chance)
            .with_context(|| format!("Record {} has no '{}' field", i, fields.chance))?;

        let score = score_value(score)
            .with_context(|| format!("Record {}: '{}' is not an integer: {}", i, fields.score, score))?;
        let chance = chance_value(chance)
            .with_context(|| format!("Record {}: '{}' is not a number: {}", i, fields.chance, chance))?;

        observations.push(Observation::new(score, chance));
    }
    debug!("Parsed {} records", observations.len());

    Ok(observations)
}

fn score_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map(f64::trunc),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

fn chance_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// Leading optionally-signed integer of `s`, after leading whitespace.
pub fn parse_int_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse::<f64>().ok()
}

/// Longest leading decimal number of `s` (sign, digits, fraction, exponent),
/// after leading whitespace.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits(end);
    let mut mantissa_digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
