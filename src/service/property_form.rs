use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use crate::{
    config::NumericParsePolicy,
    db::propertydb::PropertyExt,
    dtos::propertydtos::{FieldUpdate, ImageSlot, PropertyDraft},
    models::propertymodel::{Property, PropertyStatus, PropertyType, Tag},
    service::error::{DraftError, ServiceError},
    utils::{
        image_utils::{data_url_payload_size, encode_data_url, validate_image_size},
        numeric::{check_price, parse_count},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
}

/// The configurable answers to how lenient the form is.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormPolicy {
    pub numeric: NumericParsePolicy,
    pub clear_residential_on_type_change: bool,
    pub max_image_size_mb: Option<usize>,
}

/// Create/edit modal state. Closed forms hold the default draft.
///
/// `generation` changes on every open and close so that an image encode
/// started before the form was closed cannot land in a later draft.
#[derive(Debug, Default)]
pub struct PropertyForm {
    open: bool,
    editing: Option<Property>,
    draft: PropertyDraft,
    generation: u64,
}

#[derive(Debug, Serialize)]
pub struct OptionView {
    pub value: serde_json::Value,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub types: Vec<OptionView>,
    pub statuses: Vec<OptionView>,
    pub tags: Vec<OptionView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub mode: FormMode,
    pub editing_id: Option<i64>,
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub show_residential_fields: bool,
    pub draft: PropertyDraft,
    pub options: FormOptions,
}

impl PropertyForm {
    pub fn new() -> Self {
        PropertyForm::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn open_create(&mut self) {
        self.reset();
        self.open = true;
    }

    pub fn open_edit(&mut self, property: Property) {
        self.reset();
        self.draft = PropertyDraft::from_property(&property);
        self.editing = Some(property);
        self.open = true;
    }

    /// Discard the draft without asking.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.open = false;
        self.editing = None;
        self.draft = PropertyDraft::default();
        self.generation += 1;
    }

    fn ensure_open(&self) -> Result<(), ServiceError> {
        if self.open {
            Ok(())
        } else {
            Err(ServiceError::FormClosed)
        }
    }

    pub fn update_field(
        &mut self,
        update: FieldUpdate,
        policy: &FormPolicy,
    ) -> Result<(), ServiceError> {
        self.ensure_open()?;
        self.draft.apply(update);

        if policy.clear_residential_on_type_change && !self.draft.shows_residential_fields() {
            self.draft.beds.clear();
            self.draft.baths.clear();
        }
        Ok(())
    }

    pub fn toggle_tag(&mut self, tag: Tag, checked: bool) -> Result<(), ServiceError> {
        self.ensure_open()?;
        self.draft.toggle_tag(tag, checked);
        Ok(())
    }

    /// Store a finished encode. Returns false when the form was closed or
    /// reopened since `generation` was read; the value is then dropped.
    pub fn set_image(&mut self, slot: ImageSlot, data_url: String, generation: u64) -> bool {
        if !self.open || self.generation != generation {
            return false;
        }
        *self.draft.image_slot_mut(slot) = data_url;
        true
    }

    pub fn remove_image(&mut self, slot: ImageSlot) -> Result<(), ServiceError> {
        self.ensure_open()?;
        self.draft.image_slot_mut(slot).clear();
        Ok(())
    }

    /// Turn the current draft into a full record with the given identity.
    pub fn build_property(
        &self,
        policy: &FormPolicy,
        id: i64,
        date_added: NaiveDate,
    ) -> Result<Property, DraftError> {
        let draft = &self.draft;
        draft.validate()?;

        check_price(&draft.price, policy.numeric)
            .map_err(|_| DraftError::InvalidPrice(draft.price.clone()))?;

        let sqft = parse_field("sqft", &draft.sqft, policy.numeric)?;
        let beds = parse_optional_field("beds", &draft.beds, policy.numeric)?;
        let baths = parse_optional_field("baths", &draft.baths, policy.numeric)?;

        Ok(Property {
            id,
            title: draft.title.clone(),
            location: draft.location.clone(),
            price: draft.price.clone(),
            property_type: draft.property_type,
            status: draft.status,
            beds,
            baths,
            sqft,
            image: draft.image.clone(),
            plan_image: Some(draft.plan_image.clone()).filter(|plan| !plan.is_empty()),
            date_added,
            featured: draft.featured,
            description: draft.description.clone(),
            tags: draft.tags.clone(),
        })
    }

    /// Validate, upsert into the store, then close. On error the form stays
    /// open with the draft untouched.
    pub async fn submit<D>(
        &mut self,
        db: &D,
        policy: &FormPolicy,
        today: NaiveDate,
        now_ms: i64,
    ) -> Result<Property, ServiceError>
    where
        D: PropertyExt + Sync,
    {
        self.ensure_open()?;

        tracing::debug!(
            "Submitting form: mode={:?} title={:?} type={:?} status={:?} image={}B plan={}B tags={:?}",
            self.mode(),
            self.draft.title,
            self.draft.property_type,
            self.draft.status,
            data_url_payload_size(&self.draft.image),
            data_url_payload_size(&self.draft.plan_image),
            self.draft.tags
        );

        let saved = match &self.editing {
            Some(existing) => {
                let property = self.build_property(policy, existing.id, existing.date_added)?;
                db.replace_property(existing.id, property).await?
            }
            None => {
                // Validate before taking an id so a bad draft costs nothing.
                self.build_property(policy, 0, today)?;
                let id = db.allocate_property_id(now_ms).await;
                let property = self.build_property(policy, id, today)?;
                db.append_property(property).await?
            }
        };

        self.close();
        Ok(saved)
    }

    /// `None` while closed: the modal renders nothing.
    pub fn view(&self) -> Option<FormView> {
        if !self.open {
            return None;
        }

        let mode = self.mode();
        Some(FormView {
            mode,
            editing_id: self.editing.as_ref().map(|p| p.id),
            heading: match mode {
                FormMode::Edit => "Edit Property",
                FormMode::Create => "Add a New Property",
            },
            submit_label: match mode {
                FormMode::Edit => "Update",
                FormMode::Create => "Add",
            },
            show_residential_fields: self.draft.shows_residential_fields(),
            draft: self.draft.clone(),
            options: FormOptions::new(),
        })
    }
}

impl FormOptions {
    fn new() -> Self {
        fn option<T: Serialize>(value: T, label: &'static str) -> OptionView {
            OptionView {
                value: serde_json::to_value(value).unwrap_or_default(),
                label,
            }
        }

        FormOptions {
            types: PropertyType::ALL.iter().map(|t| option(t, t.label())).collect(),
            statuses: PropertyStatus::ALL.iter().map(|s| option(s, s.label())).collect(),
            tags: Tag::ALL.iter().map(|t| option(t, t.label())).collect(),
        }
    }
}

/// Encode an uploaded file off the async runtime.
///
/// An empty upload means no file was chosen and yields `None`.
pub async fn encode_image(
    bytes: Vec<u8>,
    content_type: Option<String>,
    max_image_size_mb: Option<usize>,
) -> Result<Option<String>, ServiceError> {
    if bytes.is_empty() {
        return Ok(None);
    }

    validate_image_size(bytes.len(), max_image_size_mb)?;

    let data_url = tokio::task::spawn_blocking(move || {
        encode_data_url(&bytes, content_type.as_deref())
    })
    .await
    .map_err(|e| ServiceError::Other(e.to_string()))??;

    Ok(Some(data_url))
}

fn parse_field(
    field: &'static str,
    value: &str,
    policy: NumericParsePolicy,
) -> Result<Option<u32>, DraftError> {
    parse_count(value, policy).map_err(|_| DraftError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_optional_field(
    field: &'static str,
    value: &str,
    policy: NumericParsePolicy,
) -> Result<Option<u32>, DraftError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse_field(field, value, policy)
    }
}
