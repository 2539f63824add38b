use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A form value that doesn't belong to the closed set of options offered by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} option: {value:?}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownOption {
    fn new(kind: &'static str, value: &str) -> Self {
        Self { kind, value: value.to_string() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[serde(rename = "standard")]
    StandardHomeCare,
    #[serde(rename = "deep")]
    DeepRefresh,
    #[serde(rename = "move")]
    MoveInOut,
    Turnover,
    #[serde(rename = "guest-ready")]
    GuestReadyPresentation,
    #[serde(rename = "routine")]
    RoutinePropertyCare,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::StandardHomeCare,
        ServiceType::DeepRefresh,
        ServiceType::MoveInOut,
        ServiceType::Turnover,
        ServiceType::GuestReadyPresentation,
        ServiceType::RoutinePropertyCare,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ServiceType::StandardHomeCare => "standard",
            ServiceType::DeepRefresh => "deep",
            ServiceType::MoveInOut => "move",
            ServiceType::Turnover => "turnover",
            ServiceType::GuestReadyPresentation => "guest-ready",
            ServiceType::RoutinePropertyCare => "routine",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::StandardHomeCare => "Standard Home Care",
            ServiceType::DeepRefresh => "Deep Refresh",
            ServiceType::MoveInOut => "Move In / Move Out",
            ServiceType::Turnover => "Turnover Cleaning (Short-Stay)",
            ServiceType::GuestReadyPresentation => "Guest-Ready Presentation",
            ServiceType::RoutinePropertyCare => "Routine Property Care",
        }
    }
}

impl FromStr for ServiceType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|v| v.value() == s)
            .ok_or_else(|| UnknownOption::new("service", s))
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Home,
    Apartment,
    Airbnb,
    Hotel,
    GuestHouse,
    Office,
    Other,
}

impl PropertyType {
    pub const ALL: [PropertyType; 7] = [
        PropertyType::Home,
        PropertyType::Apartment,
        PropertyType::Airbnb,
        PropertyType::Hotel,
        PropertyType::GuestHouse,
        PropertyType::Office,
        PropertyType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            PropertyType::Home => "home",
            PropertyType::Apartment => "apartment",
            PropertyType::Airbnb => "airbnb",
            PropertyType::Hotel => "hotel",
            PropertyType::GuestHouse => "guesthouse",
            PropertyType::Office => "office",
            PropertyType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Home => "Home",
            PropertyType::Apartment => "Apartment",
            PropertyType::Airbnb => "Airbnb / Short-Stay",
            PropertyType::Hotel => "Hotel",
            PropertyType::GuestHouse => "Guest House",
            PropertyType::Office => "Office",
            PropertyType::Other => "Other",
        }
    }

    /// Airbnb, hotel and guest house properties are priced like homes but get
    /// turnover-oriented recommendations.
    pub fn is_hospitality(self) -> bool {
        matches!(
            self,
            PropertyType::Airbnb | PropertyType::Hotel | PropertyType::GuestHouse
        )
    }
}

impl FromStr for PropertyType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|v| v.value() == s)
            .ok_or_else(|| UnknownOption::new("property", s))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    Weekly,
    BiWeekly,
    Monthly,
    TurnoverOnly,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::OneTime,
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::Monthly,
        Frequency::TurnoverOnly,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
            Frequency::TurnoverOnly => "turnover-only",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::OneTime => "One-time",
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-weekly",
            Frequency::Monthly => "Monthly",
            Frequency::TurnoverOnly => "Turnovers only (short-stay)",
        }
    }

    /// Recurring plans (weekly, bi-weekly, monthly), as opposed to one-offs and turnovers.
    pub fn is_recurring(self) -> bool {
        matches!(self, Frequency::Weekly | Frequency::BiWeekly | Frequency::Monthly)
    }
}

impl FromStr for Frequency {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::ALL
            .into_iter()
            .find(|v| v.value() == s)
            .ok_or_else(|| UnknownOption::new("frequency", s))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Morning,
    Afternoon,
    Evening,
    Flexible,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::Morning,
        TimeWindow::Afternoon,
        TimeWindow::Evening,
        TimeWindow::Flexible,
    ];

    pub fn value(self) -> &'static str {
        match self {
            TimeWindow::Morning => "morning",
            TimeWindow::Afternoon => "afternoon",
            TimeWindow::Evening => "evening",
            TimeWindow::Flexible => "flexible",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Morning => "Morning",
            TimeWindow::Afternoon => "Afternoon",
            TimeWindow::Evening => "Evening",
            TimeWindow::Flexible => "Flexible",
        }
    }
}

impl FromStr for TimeWindow {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeWindow::ALL
            .into_iter()
            .find(|v| v.value() == s)
            .ok_or_else(|| UnknownOption::new("time window", s))
    }
}

/// Flat-fee extras. Declaration order is the order they appear in a quote breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AddOn {
    InteriorWindows,
    Laundry,
    FridgeOven,
    EdgesDetails,
}

impl AddOn {
    pub const ALL: [AddOn; 4] = [
        AddOn::InteriorWindows,
        AddOn::Laundry,
        AddOn::FridgeOven,
        AddOn::EdgesDetails,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AddOn::InteriorWindows => "Interior windows",
            AddOn::Laundry => "Laundry (wash & fold)",
            AddOn::FridgeOven => "Fridge/oven interior",
            AddOn::EdgesDetails => "Edges & detail work",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOns {
    pub interior_windows: bool,
    pub laundry: bool,
    pub fridge_oven: bool,
    pub edges_details: bool,
}

impl AddOns {
    pub fn is_enabled(&self, add_on: AddOn) -> bool {
        match add_on {
            AddOn::InteriorWindows => self.interior_windows,
            AddOn::Laundry => self.laundry,
            AddOn::FridgeOven => self.fridge_oven,
            AddOn::EdgesDetails => self.edges_details,
        }
    }

    pub fn set(&mut self, add_on: AddOn, enabled: bool) {
        let flag = match add_on {
            AddOn::InteriorWindows => &mut self.interior_windows,
            AddOn::Laundry => &mut self.laundry,
            AddOn::FridgeOven => &mut self.fridge_oven,
            AddOn::EdgesDetails => &mut self.edges_details,
        };
        *flag = enabled;
    }

    pub fn with(mut self, add_on: AddOn) -> Self {
        self.set(add_on, true);
        self
    }

    /// Enabled add-ons in breakdown order.
    pub fn active(&self) -> impl Iterator<Item = AddOn> + '_ {
        AddOn::ALL.into_iter().filter(move |a| self.is_enabled(*a))
    }
}

/// Priced inputs of a quote. Room counts may be out of range here; pricing clamps them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub service_type: ServiceType,
    pub property_type: PropertyType,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub frequency: Option<Frequency>,
    pub add_ons: AddOns,
}

impl QuoteRequest {
    pub fn new(service_type: ServiceType, property_type: PropertyType, bedrooms: i32, bathrooms: i32) -> Self {
        Self {
            service_type,
            property_type,
            bedrooms,
            bathrooms,
            frequency: None,
            add_ons: AddOns::default(),
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_add_ons(mut self, add_ons: AddOns) -> Self {
        self.add_ons = add_ons;
        self
    }

    /// Unset frequency is priced as a one-time clean.
    pub fn effective_frequency(&self) -> Frequency {
        self.frequency.unwrap_or(Frequency::OneTime)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub label: String,
    pub amount: i64, // whole cedis, negative for discounts
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self { label: label.into(), amount }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub service_type: ServiceType,
    pub service_label: &'static str,
    pub reason: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub service_label: &'static str,
    pub recommended_service_type: ServiceType,
    pub recommended_service_label: &'static str,
    pub recommendation_reason: &'static str,
    pub line_items: Vec<LineItem>,
    pub total: i64,
    pub terms: Vec<&'static str>,
}

/// Who is asking and when. Carried into the WhatsApp message, never into pricing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactAndSchedule {
    pub full_name: String,
    pub phone: String,
    pub location: String,
    pub preferred_date: Option<NaiveDate>,
    pub time_window: Option<TimeWindow>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values_parse_back_to_their_variant() {
        for service in ServiceType::ALL {
            assert_eq!(service.value().parse::<ServiceType>(), Ok(service));
        }
        for property in PropertyType::ALL {
            assert_eq!(property.value().parse::<PropertyType>(), Ok(property));
        }
        for frequency in Frequency::ALL {
            assert_eq!(frequency.value().parse::<Frequency>(), Ok(frequency));
        }
        for window in TimeWindow::ALL {
            assert_eq!(window.value().parse::<TimeWindow>(), Ok(window));
        }
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = "premium".parse::<ServiceType>().unwrap_err();
        assert_eq!(err.kind, "service");
        assert_eq!(err.value, "premium");
        assert!("Home".parse::<PropertyType>().is_err());
        assert!("biweekly".parse::<Frequency>().is_err());
    }

    #[test]
    fn serde_names_match_form_values() {
        for service in ServiceType::ALL {
            let json = serde_json::to_string(&service).unwrap();
            assert_eq!(json, format!("\"{}\"", service.value()));
        }
        for property in PropertyType::ALL {
            let json = serde_json::to_string(&property).unwrap();
            assert_eq!(json, format!("\"{}\"", property.value()));
        }
        for frequency in Frequency::ALL {
            let json = serde_json::to_string(&frequency).unwrap();
            assert_eq!(json, format!("\"{}\"", frequency.value()));
        }
    }

    #[test]
    fn active_add_ons_keep_declaration_order() {
        let add_ons = AddOns::default()
            .with(AddOn::EdgesDetails)
            .with(AddOn::InteriorWindows)
            .with(AddOn::FridgeOven);
        let active: Vec<_> = add_ons.active().collect();
        assert_eq!(
            active,
            vec![AddOn::InteriorWindows, AddOn::FridgeOven, AddOn::EdgesDetails]
        );
    }

    #[test]
    fn hospitality_properties() {
        let hospitality: Vec<_> = PropertyType::ALL
            .into_iter()
            .filter(|p| p.is_hospitality())
            .collect();
        assert_eq!(
            hospitality,
            vec![PropertyType::Airbnb, PropertyType::Hotel, PropertyType::GuestHouse]
        );
    }

    #[test]
    fn missing_frequency_means_one_time() {
        let request = QuoteRequest::new(ServiceType::DeepRefresh, PropertyType::Home, 1, 1);
        assert_eq!(request.effective_frequency(), Frequency::OneTime);
        let weekly = request.with_frequency(Frequency::Weekly);
        assert_eq!(weekly.effective_frequency(), Frequency::Weekly);
    }
}
