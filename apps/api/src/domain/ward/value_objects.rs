use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    pub static ref WARD_ID_REGEX: regex::Regex = regex::Regex::new(r"^[a-z0-9][a-z0-9-]{0,63}$").unwrap();
}

/// Catalog slug of a ward or city, e.g. `pumpwell`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CatalogSlug {
    #[validate(regex(path = *WARD_ID_REGEX))]
    pub value: String,
}

impl CatalogSlug {
    /// Normalises to lowercase before validating.
    pub fn new(value: &str) -> Result<Self, validator::ValidationErrors> {
        let slug = Self {
            value: value.trim().to_lowercase(),
        };
        slug.validate()?;
        Ok(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
