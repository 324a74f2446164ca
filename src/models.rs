use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::plants;

/// plant details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = plants)]
pub struct Plant {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub price: f64,
}

/// New plant details, ready to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Insertable)]
#[diesel(table_name = plants)]
pub struct NewPlant {
    pub name: String,
    pub image: String,
    pub price: f64,
}

impl NewPlant {
    /// Constructs new plant details without going through validation.
    pub fn new(name: impl Into<String>, image: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            price,
        }
    }
}

/// Body of `POST /plants` as it arrives on the wire.
///
/// Every field is optional so that a missing field surfaces as a
/// [`ValidationError`] instead of an opaque deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantPayload {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("price must be a finite, non-negative number")]
    InvalidPrice,
}

impl PlantPayload {
    /// Checks the payload and turns it into insertable plant details.
    ///
    /// Values are passed through untouched: nothing is trimmed or rounded.
    pub fn validate(self) -> Result<NewPlant, ValidationError> {
        let name = required_text("name", self.name)?;
        let image = required_text("image", self.image)?;
        let price = self.price.ok_or(ValidationError::MissingField("price"))?;

        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }

        Ok(NewPlant { name, image, price })
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}
