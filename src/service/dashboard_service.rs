use serde::Serialize;

use crate::{
    dtos::propertydtos::PropertyListItemDto,
    models::propertymodel::{Property, PropertyStatus, PropertyType},
    utils::numeric::price_amount,
};

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
pub struct CountBy<T> {
    pub key: T,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub featured: usize,
    pub rentals: usize,
    pub by_status: Vec<CountBy<PropertyStatus>>,
    pub by_type: Vec<CountBy<PropertyType>>,
    /// Sum of asking prices of listings still for sale; non-numeric prices are skipped.
    pub for_sale_value: f64,
    pub recent: Vec<PropertyListItemDto>,
}

pub fn summarize(properties: &[Property]) -> DashboardSummary {
    let by_status: Vec<CountBy<PropertyStatus>> = PropertyStatus::ALL
        .iter()
        .map(|status| CountBy {
            key: *status,
            label: status.label(),
            count: properties.iter().filter(|p| p.status == *status).count(),
        })
        .collect();

    let by_type: Vec<CountBy<PropertyType>> = PropertyType::ALL
        .iter()
        .map(|property_type| CountBy {
            key: *property_type,
            label: property_type.label(),
            count: properties
                .iter()
                .filter(|p| p.property_type == *property_type)
                .count(),
        })
        .collect();

    let for_sale_value: f64 = properties
        .iter()
        .filter(|p| p.status == PropertyStatus::ForSale)
        .filter_map(|p| price_amount(&p.price))
        .sum();

    let mut recent: Vec<&Property> = properties.iter().collect();
    recent.sort_by(|a, b| b.date_added.cmp(&a.date_added).then(b.id.cmp(&a.id)));

    DashboardSummary {
        total: properties.len(),
        featured: properties.iter().filter(|p| p.featured).count(),
        rentals: properties.iter().filter(|p| p.is_rental()).count(),
        by_status,
        by_type,
        for_sale_value,
        recent: recent
            .into_iter()
            .take(RECENT_LIMIT)
            .map(PropertyListItemDto::from_property)
            .collect(),
    }
}
