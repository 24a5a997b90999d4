use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::models::{CreateItemDto, FieldError, UpdateItemDto};

/// Maximum accepted length for an item name
pub const NAME_MAX_LENGTH: usize = 120;

const RECOGNIZED_FIELDS: [&str; 2] = ["name", "price"];

fn field_error(field: &str, message: impl Into<String>) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.into(),
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, Vec<FieldError>> {
    match body.as_object() {
        Some(map) => Ok(map),
        None => Err(vec![field_error("body", "request body must be a JSON object")]),
    }
}

fn reject_unknown_fields(map: &Map<String, Value>, errors: &mut Vec<FieldError>) {
    for key in map.keys() {
        if !RECOGNIZED_FIELDS.contains(&key.as_str()) {
            errors.push(field_error(key, format!("property {} should not exist", key)));
        }
    }
}

fn parse_name(value: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let name = match value.as_str() {
        Some(name) => name,
        None => {
            errors.push(field_error("name", "name must be a string"));
            return None;
        }
    };
    if name.trim().is_empty() {
        errors.push(field_error("name", "name should not be empty"));
        return None;
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        errors.push(field_error(
            "name",
            format!(
                "name must be shorter than or equal to {} characters",
                NAME_MAX_LENGTH
            ),
        ));
        return None;
    }
    Some(name.to_string())
}

fn parse_price(value: &Value, errors: &mut Vec<FieldError>) -> Option<Decimal> {
    let number = match value {
        Value::Number(number) => number,
        _ => {
            errors.push(field_error("price", "price must be a number"));
            return None;
        }
    };
    // Parse the decimal text directly, without an f64 round trip
    let raw = number.to_string();
    let price = match Decimal::from_str(&raw).or_else(|_| Decimal::from_scientific(&raw)) {
        Ok(price) => price,
        Err(_) => {
            errors.push(field_error(
                "price",
                "price must be a number conforming to the specified constraints",
            ));
            return None;
        }
    };
    if price <= Decimal::ZERO {
        errors.push(field_error("price", "price must be a positive number"));
        return None;
    }
    Some(price)
}

/// Check a raw create payload against the item schema.
///
/// Accepts only objects containing exactly `name` and `price`; returns either
/// the validated payload or every field-level failure found in one pass.
pub fn parse_create(body: &Value) -> Result<CreateItemDto, Vec<FieldError>> {
    let map = as_object(body)?;
    let mut errors = Vec::new();

    reject_unknown_fields(map, &mut errors);

    let name = match map.get("name") {
        Some(value) => parse_name(value, &mut errors),
        None => {
            errors.push(field_error("name", "name should not be empty"));
            None
        }
    };
    let price = match map.get("price") {
        Some(value) => parse_price(value, &mut errors),
        None => {
            errors.push(field_error("price", "price must be a number"));
            None
        }
    };

    match (name, price) {
        (Some(name), Some(price)) if errors.is_empty() => Ok(CreateItemDto { name, price }),
        _ => Err(errors),
    }
}

/// Check a raw partial-update payload against the item schema.
///
/// Field rules match [`parse_create`], but every field is optional; an empty
/// object is a valid no-op update. Unrecognized fields are still rejected.
pub fn parse_update(body: &Value) -> Result<UpdateItemDto, Vec<FieldError>> {
    let map = as_object(body)?;
    let mut errors = Vec::new();

    reject_unknown_fields(map, &mut errors);

    let name = map.get("name").and_then(|value| parse_name(value, &mut errors));
    let price = map.get("price").and_then(|value| parse_price(value, &mut errors));

    if errors.is_empty() {
        Ok(UpdateItemDto { name, price })
    } else {
        Err(errors)
    }
}
