use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use super::composer::compute_quote;
use super::message::build_quote_message;
use super::models::{
    AddOn, AddOns, ContactAndSchedule, Frequency, PropertyType, QuoteRequest, QuoteResult,
    ServiceType, TimeWindow, UnknownOption,
};
use super::pricing::{round_half_up, MAX_ROOMS};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_LEN: usize = 7;
pub const MIN_LOCATION_LEN: usize = 2;
pub const MAX_NOTES_LEN: usize = 800;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Phone,
    Bedrooms,
    Bathrooms,
    Location,
    PreferredDate,
    Notes,
    SendViaWhatsApp,
    ConfirmCommitment,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name.")]
    NameTooShort,
    #[error("Please enter a valid phone/WhatsApp number.")]
    PhoneTooShort,
    #[error("Enter a whole number between 0 and 20.")]
    RoomCountOutOfRange,
    #[error("Please enter your area/location in Kumasi.")]
    LocationMissing,
    #[error("Please pick a valid date.")]
    InvalidDate,
    #[error("Please keep notes under 800 characters.")]
    NotesTooLong,
    #[error("Please confirm WhatsApp submission.")]
    WhatsAppNotConfirmed,
    #[error("Please confirm the quote commitment.")]
    CommitmentNotConfirmed,
}

/// Per-field validation failures, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

/// A fully validated form, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSubmission {
    pub request: QuoteRequest,
    pub contact: ContactAndSchedule,
}

impl QuoteSubmission {
    pub fn message(&self) -> String {
        build_quote_message(&self.request, &self.contact)
    }
}

/// Raw state of the quote form, as typed. Selects are stored typed since the page only
/// offers known options.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteForm {
    pub full_name: String,
    pub phone: String,
    pub service_type: ServiceType,
    pub property_type: PropertyType,
    pub bedrooms: String,
    pub bathrooms: String,
    pub location: String,
    pub preferred_date: String,
    pub time_window: Option<TimeWindow>,
    pub frequency: Option<Frequency>,
    pub add_ons: AddOns,
    pub notes: String,
    pub send_via_whatsapp: bool,
    pub confirm_commitment: bool,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            service_type: ServiceType::StandardHomeCare,
            property_type: PropertyType::Home,
            bedrooms: "2".to_string(),
            bathrooms: "1".to_string(),
            location: String::new(),
            preferred_date: String::new(),
            time_window: Some(TimeWindow::Flexible),
            frequency: Some(Frequency::OneTime),
            add_ons: AddOns::default(),
            notes: String::new(),
            send_via_whatsapp: true,
            confirm_commitment: true,
        }
    }
}

/// Lenient room count for the live preview: anything unreadable counts as zero,
/// fractions round, and pricing clamps the rest.
fn loose_rooms(raw: &str) -> i32 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => round_half_up(n).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        _ => 0,
    }
}

fn strict_rooms(raw: &str) -> Result<i32, FieldError> {
    let n: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FieldError::RoomCountOutOfRange)?;
    if !n.is_finite() || n.fract() != 0.0 || n < 0.0 || n > f64::from(MAX_ROOMS) {
        return Err(FieldError::RoomCountOutOfRange);
    }
    Ok(n as i32)
}

fn parse_date(raw: &str) -> Option<Result<NaiveDate, FieldError>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| FieldError::InvalidDate))
}

fn optional_notes(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn optional_option<T: std::str::FromStr<Err = UnknownOption>>(value: &str) -> Result<Option<T>, UnknownOption> {
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

impl QuoteForm {
    /// Default form with the service pre-selected from a `?service=` link, if it names one.
    pub fn with_service_param(param: Option<&str>) -> Self {
        let mut form = Self::default();
        if let Some(service) = param.and_then(|p| p.parse::<ServiceType>().ok()) {
            form.service_type = service;
        }
        form
    }

    pub fn set_service_type(&mut self, value: &str) -> Result<(), UnknownOption> {
        self.service_type = value.parse()?;
        Ok(())
    }

    pub fn set_property_type(&mut self, value: &str) -> Result<(), UnknownOption> {
        self.property_type = value.parse()?;
        Ok(())
    }

    pub fn set_frequency(&mut self, value: &str) -> Result<(), UnknownOption> {
        self.frequency = optional_option(value)?;
        Ok(())
    }

    pub fn set_time_window(&mut self, value: &str) -> Result<(), UnknownOption> {
        self.time_window = optional_option(value)?;
        Ok(())
    }

    pub fn set_add_on(&mut self, add_on: AddOn, enabled: bool) {
        self.add_ons.set(add_on, enabled);
    }

    /// Priced snapshot of the current values, whether or not they validate.
    pub fn quote_request(&self) -> QuoteRequest {
        QuoteRequest {
            service_type: self.service_type,
            property_type: self.property_type,
            bedrooms: loose_rooms(&self.bedrooms),
            bathrooms: loose_rooms(&self.bathrooms),
            frequency: self.frequency,
            add_ons: self.add_ons,
        }
    }

    pub fn contact(&self) -> ContactAndSchedule {
        ContactAndSchedule {
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            preferred_date: parse_date(&self.preferred_date).and_then(Result::ok),
            time_window: self.time_window,
            notes: optional_notes(&self.notes),
        }
    }

    pub fn quote(&self) -> QuoteResult {
        compute_quote(&self.quote_request())
    }

    pub fn message_preview(&self) -> String {
        build_quote_message(&self.quote_request(), &self.contact())
    }

    /// Switches the requested service to whatever the current quote recommends.
    pub fn apply_recommendation(&mut self) -> bool {
        let recommended = self.quote().recommended_service_type;
        if recommended == self.service_type {
            return false;
        }
        self.service_type = recommended;
        true
    }

    pub fn validate(&self) -> Result<QuoteSubmission, FormErrors> {
        let mut errors = FormErrors::default();

        if self.full_name.trim().chars().count() < MIN_NAME_LEN {
            errors.insert(Field::FullName, FieldError::NameTooShort);
        }
        if self.phone.trim().chars().count() < MIN_PHONE_LEN {
            errors.insert(Field::Phone, FieldError::PhoneTooShort);
        }

        let bedrooms = strict_rooms(&self.bedrooms).unwrap_or_else(|e| {
            errors.insert(Field::Bedrooms, e);
            0
        });
        let bathrooms = strict_rooms(&self.bathrooms).unwrap_or_else(|e| {
            errors.insert(Field::Bathrooms, e);
            0
        });

        if self.location.trim().chars().count() < MIN_LOCATION_LEN {
            errors.insert(Field::Location, FieldError::LocationMissing);
        }

        let preferred_date = match parse_date(&self.preferred_date) {
            Some(Ok(date)) => Some(date),
            Some(Err(e)) => {
                errors.insert(Field::PreferredDate, e);
                None
            }
            None => None,
        };

        if self.notes.chars().count() > MAX_NOTES_LEN {
            errors.insert(Field::Notes, FieldError::NotesTooLong);
        }
        if !self.send_via_whatsapp {
            errors.insert(Field::SendViaWhatsApp, FieldError::WhatsAppNotConfirmed);
        }
        if !self.confirm_commitment {
            errors.insert(Field::ConfirmCommitment, FieldError::CommitmentNotConfirmed);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let request = QuoteRequest {
            bedrooms,
            bathrooms,
            ..self.quote_request()
        };
        let contact = ContactAndSchedule {
            preferred_date,
            ..self.contact()
        };
        Ok(QuoteSubmission { request, contact })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuoteForm {
        QuoteForm {
            full_name: "Ama Mensah".to_string(),
            phone: "059 123 4567".to_string(),
            location: "Asokwa".to_string(),
            ..QuoteForm::default()
        }
    }

    #[test]
    fn defaults_match_the_page() {
        let form = QuoteForm::default();
        assert_eq!(form.service_type, ServiceType::StandardHomeCare);
        assert_eq!(form.property_type, PropertyType::Home);
        assert_eq!(form.quote_request().bedrooms, 2);
        assert_eq!(form.quote_request().bathrooms, 1);
        assert_eq!(form.time_window, Some(TimeWindow::Flexible));
        assert_eq!(form.frequency, Some(Frequency::OneTime));
        assert!(form.send_via_whatsapp && form.confirm_commitment);
        assert_eq!(form.quote().total, 145);
    }

    #[test]
    fn empty_form_reports_each_missing_field() {
        let errors = QuoteForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec![Field::FullName, Field::Phone, Field::Location]);
        assert_eq!(
            errors.get(Field::Phone).map(ToString::to_string).as_deref(),
            Some("Please enter a valid phone/WhatsApp number.")
        );
    }

    #[test]
    fn valid_form_becomes_a_submission() {
        let mut form = filled();
        form.preferred_date = "2026-03-14".to_string();
        form.notes = "Gate code 1234".to_string();
        form.set_add_on(AddOn::FridgeOven, true);

        let submission = form.validate().unwrap();
        assert_eq!(submission.request.bedrooms, 2);
        assert!(submission.request.add_ons.fridge_oven);
        assert_eq!(submission.contact.preferred_date, NaiveDate::from_ymd_opt(2026, 3, 14));
        assert_eq!(submission.contact.notes.as_deref(), Some("Gate code 1234"));
        assert_eq!(submission.message(), form.message_preview());
    }

    #[test]
    fn room_counts_must_be_whole_and_in_range() {
        for bad in ["21", "-1", "2.5", "", "two", "NaN"] {
            let mut form = filled();
            form.bedrooms = bad.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(Field::Bedrooms), Some(&FieldError::RoomCountOutOfRange), "{bad:?}");
            assert_eq!(errors.len(), 1);
        }
        let mut form = filled();
        form.bathrooms = " 20 ".to_string();
        assert_eq!(form.validate().unwrap().request.bathrooms, 20);
    }

    #[test]
    fn preview_tolerates_bad_room_input() {
        let mut form = filled();
        form.bedrooms = "lots".to_string();
        form.bathrooms = "2.5".to_string();
        let request = form.quote_request();
        assert_eq!(request.bedrooms, 0);
        assert_eq!(request.bathrooms, 3);

        form.bedrooms = "999".to_string();
        assert_eq!(form.quote().total, {
            let mut capped = form.clone();
            capped.bedrooms = "20".to_string();
            capped.quote().total
        });
    }

    #[test]
    fn acknowledgements_are_required() {
        let mut form = filled();
        form.send_via_whatsapp = false;
        form.confirm_commitment = false;
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::SendViaWhatsApp), Some(&FieldError::WhatsAppNotConfirmed));
        assert_eq!(
            errors.get(Field::ConfirmCommitment),
            Some(&FieldError::CommitmentNotConfirmed)
        );
    }

    #[test]
    fn bad_date_and_long_notes() {
        let mut form = filled();
        form.preferred_date = "14/03/2026".to_string();
        form.notes = "x".repeat(MAX_NOTES_LEN + 1);
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::PreferredDate), Some(&FieldError::InvalidDate));
        assert_eq!(errors.get(Field::Notes), Some(&FieldError::NotesTooLong));
        // The preview simply drops a date it can't read.
        assert_eq!(form.contact().preferred_date, None);
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let mut form = filled();
        form.full_name = "   ".to_string();
        assert!(form.validate().unwrap_err().get(Field::FullName).is_some());
    }

    #[test]
    fn select_setters_reject_unknown_values() {
        let mut form = QuoteForm::default();
        assert!(form.set_service_type("move").is_ok());
        assert_eq!(form.service_type, ServiceType::MoveInOut);
        assert!(form.set_service_type("premium").is_err());
        assert_eq!(form.service_type, ServiceType::MoveInOut);

        assert!(form.set_property_type("guesthouse").is_ok());
        assert_eq!(form.property_type, PropertyType::GuestHouse);

        assert!(form.set_frequency("").is_ok());
        assert_eq!(form.frequency, None);
        assert!(form.set_frequency("bi-weekly").is_ok());
        assert_eq!(form.frequency, Some(Frequency::BiWeekly));
        assert!(form.set_time_window("night").is_err());
        assert_eq!(form.time_window, Some(TimeWindow::Flexible));
    }

    #[test]
    fn service_param_preselects_service() {
        let form = QuoteForm::with_service_param(Some("guest-ready"));
        assert_eq!(form.service_type, ServiceType::GuestReadyPresentation);
        let form = QuoteForm::with_service_param(Some("nonsense"));
        assert_eq!(form.service_type, ServiceType::StandardHomeCare);
        let form = QuoteForm::with_service_param(None);
        assert_eq!(form.service_type, ServiceType::StandardHomeCare);
    }

    #[test]
    fn applying_the_recommendation() {
        let mut form = filled();
        assert!(form.apply_recommendation());
        assert_eq!(form.service_type, ServiceType::DeepRefresh);
        // Deep refresh, one-time, home: nothing better to suggest.
        assert!(!form.apply_recommendation());
    }
}
