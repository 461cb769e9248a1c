use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::propertydb::PropertySearchFilters,
    models::propertymodel::{Property, PropertyStatus, PropertyType, Tag},
};

/// The editable, text-typed copy of a property held while the form is open.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,

    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,

    pub beds: String,
    pub baths: String,

    #[validate(length(min = 1, message = "Area is required"))]
    pub sqft: String,

    pub description: String,
    pub featured: bool,

    #[validate(length(min = 1, message = "A main image is required"))]
    pub image: String,
    pub plan_image: String,

    pub tags: Vec<Tag>,
}

impl PropertyDraft {
    /// Edit-mode starting point: numbers become text, missing ones empty text.
    pub fn from_property(property: &Property) -> Self {
        fn text(value: Option<u32>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        PropertyDraft {
            title: property.title.clone(),
            location: property.location.clone(),
            price: property.price.clone(),
            property_type: property.property_type,
            status: property.status,
            beds: text(property.beds),
            baths: text(property.baths),
            sqft: text(property.sqft),
            description: property.description.clone(),
            featured: property.featured,
            image: property.image.clone(),
            plan_image: property.plan_image.clone().unwrap_or_default(),
            tags: property.tags.clone(),
        }
    }

    pub fn shows_residential_fields(&self) -> bool {
        self.property_type.is_residential()
    }

    /// Replace exactly one field.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Title(value) => self.title = value,
            FieldUpdate::Location(value) => self.location = value,
            FieldUpdate::Price(value) => self.price = value,
            FieldUpdate::Type(value) => self.property_type = value,
            FieldUpdate::Status(value) => self.status = value,
            FieldUpdate::Beds(value) => self.beds = value,
            FieldUpdate::Baths(value) => self.baths = value,
            FieldUpdate::Sqft(value) => self.sqft = value,
            FieldUpdate::Description(value) => self.description = value,
            FieldUpdate::Featured(value) => self.featured = value,
        }
    }

    /// Checkbox semantics: checked adds the tag once, unchecked removes it.
    pub fn toggle_tag(&mut self, tag: Tag, checked: bool) {
        if checked {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        } else {
            self.tags.retain(|t| *t != tag);
        }
    }

    pub fn image_slot_mut(&mut self, slot: ImageSlot) -> &mut String {
        match slot {
            ImageSlot::Image => &mut self.image,
            ImageSlot::Plan => &mut self.plan_image,
        }
    }
}

/// One form field change, e.g. `{"field": "sqft", "value": "120"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    Title(String),
    Location(String),
    Price(String),
    Type(PropertyType),
    Status(PropertyStatus),
    Beds(String),
    Baths(String),
    Sqft(String),
    Description(String),
    Featured(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSlot {
    Image,
    Plan,
}

impl std::str::FromStr for ImageSlot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(ImageSlot::Image),
            "plan" | "planImage" => Ok(ImageSlot::Plan),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TagToggleDto {
    pub tag: Tag,
    pub checked: bool,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct PropertyQueryDto {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub featured: Option<bool>,
    pub tag: Option<Tag>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

impl PropertyQueryDto {
    pub fn filters(&self) -> PropertySearchFilters {
        PropertySearchFilters {
            search: self.search.clone(),
            property_type: self.property_type,
            status: self.status,
            featured: self.featured,
            tag: self.tag,
        }
    }
}

/// One row of the listing page. Images are left out; the detail route has them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListItemDto {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub price: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    pub sqft: Option<u32>,
    pub date_added: chrono::NaiveDate,
    pub featured: bool,
    pub tags: Vec<Tag>,
    pub is_rental: bool,
    pub has_plan: bool,
}

impl PropertyListItemDto {
    pub fn from_property(property: &Property) -> Self {
        let (beds, baths) = property.rooms().unwrap_or((None, None));
        Self {
            id: property.id,
            title: property.title.clone(),
            location: property.location.clone(),
            price: property.price.clone(),
            property_type: property.property_type,
            status: property.status,
            beds,
            baths,
            sqft: property.sqft,
            date_added: property.date_added,
            featured: property.featured,
            tags: property.tags.clone(),
            is_rental: property.is_rental(),
            has_plan: property.plan_image.is_some(),
        }
    }
}

#[derive(Serialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}
