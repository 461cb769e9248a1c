use chrono::NaiveDate;
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyType {
    #[default]
    Apartment,
    Villa,
    House,
    Commerce,
    Land,
    Office,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::House,
        PropertyType::Commerce,
        PropertyType::Land,
        PropertyType::Office,
    ];

    /// Bedrooms and bathrooms only mean something for these.
    pub fn is_residential(self) -> bool {
        matches!(
            self,
            PropertyType::Apartment | PropertyType::Villa | PropertyType::House
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::House => "House",
            PropertyType::Commerce => "Commerce",
            PropertyType::Land => "Land",
            PropertyType::Office => "Office",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyStatus {
    #[default]
    ForSale,
    ForRent,
    Sold,
    Rented,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 4] = [
        PropertyStatus::ForSale,
        PropertyStatus::ForRent,
        PropertyStatus::Sold,
        PropertyStatus::Rented,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Rented => "Rented",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    ForSale,
    ForRent,
    Featured,
    Trending,
    Premium,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::ForSale,
        Tag::ForRent,
        Tag::Featured,
        Tag::Trending,
        Tag::Premium,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tag::ForSale => "For Sale",
            Tag::ForRent => "For Rent",
            Tag::Featured => "Featured",
            Tag::Trending => "Trending",
            Tag::Premium => "Premium",
        }
    }
}

/// A single listing. `isRental` is not stored: it is always derived from
/// `status` when the record is read or serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub price: String,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    /// `None` only when the area failed to parse under the lenient policy.
    pub sqft: Option<u32>,
    pub image: String,
    pub plan_image: Option<String>,
    pub date_added: NaiveDate,
    pub featured: bool,
    pub description: String,
    pub tags: Vec<Tag>,
}

impl Property {
    pub fn is_rental(&self) -> bool {
        self.status == PropertyStatus::ForRent
    }

    /// Bedrooms and bathrooms, or nothing for non-residential listings
    /// (stale values may still be stored on those).
    pub fn rooms(&self) -> Option<(Option<u32>, Option<u32>)> {
        self.property_type
            .is_residential()
            .then_some((self.beds, self.baths))
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Listings the back office starts with when seeding is enabled.
    pub fn sample_listings() -> Vec<Property> {
        vec![
            Property {
                id: 1,
                title: "Villa on Hollywood Boulevard".to_string(),
                location: "Hatteras Lane, Hollywood, FL 33019, USA".to_string(),
                price: "740000".to_string(),
                property_type: PropertyType::Villa,
                status: PropertyStatus::ForSale,
                beds: Some(3),
                baths: Some(4),
                sqft: Some(4530),
                image: "https://images.unsplash.com/photo-1487958449943-2429e8be8625?auto=format&fit=crop&w=800&q=80".to_string(),
                plan_image: None,
                date_added: NaiveDate::from_ymd_opt(2024, 6, 13).unwrap_or_default(),
                featured: true,
                description: "Magnificent modern villa with panoramic view".to_string(),
                tags: vec![Tag::ForSale, Tag::Featured, Tag::Trending],
            },
            Property {
                id: 2,
                title: "Traditional Cuisine Restaurant".to_string(),
                location: "Sunset Drive, Miami, FL, USA".to_string(),
                price: "2600".to_string(),
                property_type: PropertyType::Commerce,
                status: PropertyStatus::ForRent,
                beds: None,
                baths: None,
                sqft: Some(950),
                image: "https://images.unsplash.com/photo-1518005020951-eccb494ad742?auto=format&fit=crop&w=800&q=80".to_string(),
                plan_image: None,
                date_added: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap_or_default(),
                featured: false,
                description: "Commercial space ideal for a restaurant".to_string(),
                tags: vec![Tag::ForRent],
            },
        ]
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Property", 16)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("location", &self.location)?;
        state.serialize_field("price", &self.price)?;
        state.serialize_field("type", &self.property_type)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("beds", &self.beds)?;
        state.serialize_field("baths", &self.baths)?;
        state.serialize_field("sqft", &self.sqft)?;
        state.serialize_field("image", &self.image)?;
        state.serialize_field("planImage", &self.plan_image)?;
        state.serialize_field("dateAdded", &self.date_added)?;
        state.serialize_field("featured", &self.featured)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("tags", &self.tags)?;
        state.serialize_field("isRental", &self.is_rental())?;
        state.end()
    }
}
