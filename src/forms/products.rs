//! Mapping of JSON request bodies onto product payloads.
//!
//! Bodies are read as a raw JSON object first so that "field absent" and
//! "field present with the wrong type" stay distinguishable: the former is
//! fine for a partial update, the latter is always a client error.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::product::{NewProduct, ProductChanges};

/// A decoded JSON request body.
pub type JsonObject = Map<String, Value>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductFormError {
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Field '{0}' must be a string")]
    NotAString(&'static str),
    #[error("Field '{0}' must be an integer")]
    NotAnInteger(&'static str),
}

/// Decode `body` into a JSON object.
pub fn parse_json_object(body: &[u8]) -> Result<JsonObject, ProductFormError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ProductFormError::MalformedJson(e.to_string()))?;
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(ProductFormError::NotAnObject),
    }
}

/// The six mutable product fields as found in a request body.
///
/// Present fields are typed by serde; `null` counts as a type mismatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub products: Option<String>,
    pub category: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub cost: Option<i32>,
    pub quantity: Option<i32>,
}

fn field<T: DeserializeOwned>(
    object: &JsonObject,
    name: &'static str,
    mismatch: fn(&'static str) -> ProductFormError,
) -> Result<Option<T>, ProductFormError> {
    object
        .get(name)
        .map(|value| T::deserialize(value).map_err(|_| mismatch(name)))
        .transpose()
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ProductFormError> {
    value.ok_or(ProductFormError::MissingField(field))
}

/// Unknown keys are ignored; only the six mutable fields are read.
impl TryFrom<&JsonObject> for ProductForm {
    type Error = ProductFormError;

    fn try_from(object: &JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            products: field(object, "products", ProductFormError::NotAString)?,
            category: field(object, "category", ProductFormError::NotAString)?,
            name: field(object, "name", ProductFormError::NotAString)?,
            brand: field(object, "brand", ProductFormError::NotAString)?,
            cost: field(object, "cost", ProductFormError::NotAnInteger)?,
            quantity: field(object, "quantity", ProductFormError::NotAnInteger)?,
        })
    }
}

impl TryFrom<ProductForm> for NewProduct {
    type Error = ProductFormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        Ok(Self {
            products: required(form.products, "products")?,
            category: required(form.category, "category")?,
            name: required(form.name, "name")?,
            brand: required(form.brand, "brand")?,
            cost: required(form.cost, "cost")?,
            quantity: required(form.quantity, "quantity")?,
        })
    }
}

impl From<ProductForm> for ProductChanges {
    fn from(form: ProductForm) -> Self {
        Self {
            products: form.products,
            category: form.category,
            name: form.name,
            brand: form.brand,
            cost: form.cost,
            quantity: form.quantity,
        }
    }
}

impl TryFrom<&JsonObject> for NewProduct {
    type Error = ProductFormError;

    fn try_from(object: &JsonObject) -> Result<Self, Self::Error> {
        ProductForm::try_from(object)?.try_into()
    }
}

impl TryFrom<&JsonObject> for ProductChanges {
    type Error = ProductFormError;

    fn try_from(object: &JsonObject) -> Result<Self, Self::Error> {
        ProductForm::try_from(object).map(Self::from)
    }
}
