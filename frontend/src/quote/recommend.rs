use super::models::{Frequency, QuoteRequest, Recommendation, ServiceType};

pub const GUEST_READY_REASON: &str = "Best for a photo-ready, hotel-style presentation for guests.";
pub const TURNOVER_ONLY_REASON: &str = "Best for consistent resets between guests.";
pub const SHORT_STAY_REASON: &str = "Short-stays usually benefit most from a consistent turnover clean.";
pub const ONE_TIME_REASON: &str = "One-time cleans typically feel best with a deeper reset.";
pub const RECURRING_REASON: &str = "Recurring visits are best kept consistent with Standard Home Care.";
pub const MATCHES_REASON: &str = "Matches your selection.";

fn recommend(service_type: ServiceType, reason: &'static str) -> Recommendation {
    Recommendation {
        service_type,
        service_label: service_type.label(),
        reason,
    }
}

/// Suggests the service that best fits the request. Rules are checked in order and the
/// first match wins: hospitality properties, then one-time standard cleans, then
/// recurring plans.
pub fn recommend_service(request: &QuoteRequest) -> Recommendation {
    let frequency = request.frequency;

    if request.property_type.is_hospitality() {
        if request.service_type == ServiceType::GuestReadyPresentation {
            return recommend(ServiceType::GuestReadyPresentation, GUEST_READY_REASON);
        }
        let reason = if frequency == Some(Frequency::TurnoverOnly) {
            TURNOVER_ONLY_REASON
        } else {
            SHORT_STAY_REASON
        };
        return recommend(ServiceType::Turnover, reason);
    }

    if request.service_type == ServiceType::StandardHomeCare
        && matches!(frequency, None | Some(Frequency::OneTime))
    {
        return recommend(ServiceType::DeepRefresh, ONE_TIME_REASON);
    }

    if frequency.map_or(false, Frequency::is_recurring) {
        return recommend(ServiceType::StandardHomeCare, RECURRING_REASON);
    }

    recommend(request.service_type, MATCHES_REASON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::models::PropertyType;

    fn request(service: ServiceType, property: PropertyType, frequency: Option<Frequency>) -> QuoteRequest {
        let mut request = QuoteRequest::new(service, property, 2, 1);
        request.frequency = frequency;
        request
    }

    #[test]
    fn hospitality_keeps_guest_ready() {
        for property in [PropertyType::Airbnb, PropertyType::Hotel, PropertyType::GuestHouse] {
            let rec = recommend_service(&request(
                ServiceType::GuestReadyPresentation,
                property,
                Some(Frequency::Weekly),
            ));
            assert_eq!(rec.service_type, ServiceType::GuestReadyPresentation);
            assert_eq!(rec.reason, GUEST_READY_REASON);
        }
    }

    #[test]
    fn hospitality_otherwise_gets_turnover() {
        let rec = recommend_service(&request(
            ServiceType::Turnover,
            PropertyType::Airbnb,
            Some(Frequency::TurnoverOnly),
        ));
        assert_eq!(rec.service_type, ServiceType::Turnover);
        assert_eq!(rec.service_label, "Turnover Cleaning (Short-Stay)");
        assert_eq!(rec.reason, TURNOVER_ONLY_REASON);

        // Hospitality wins over the one-time standard rule.
        let rec = recommend_service(&request(ServiceType::StandardHomeCare, PropertyType::Hotel, None));
        assert_eq!(rec.service_type, ServiceType::Turnover);
        assert_eq!(rec.reason, SHORT_STAY_REASON);
    }

    #[test]
    fn hospitality_never_recommends_residential_services() {
        let frequencies = [
            None,
            Some(Frequency::OneTime),
            Some(Frequency::Weekly),
            Some(Frequency::BiWeekly),
            Some(Frequency::Monthly),
            Some(Frequency::TurnoverOnly),
        ];
        for property in PropertyType::ALL.into_iter().filter(|p| p.is_hospitality()) {
            for service in ServiceType::ALL {
                for frequency in frequencies {
                    let rec = recommend_service(&request(service, property, frequency));
                    assert!(
                        matches!(
                            rec.service_type,
                            ServiceType::Turnover | ServiceType::GuestReadyPresentation
                        ),
                        "{:?} {:?} {:?}",
                        service,
                        property,
                        frequency
                    );
                }
            }
        }
    }

    #[test]
    fn one_time_standard_suggests_deep_refresh() {
        for frequency in [None, Some(Frequency::OneTime)] {
            let rec = recommend_service(&request(ServiceType::StandardHomeCare, PropertyType::Home, frequency));
            assert_eq!(rec.service_type, ServiceType::DeepRefresh);
            assert_eq!(rec.service_label, "Deep Refresh");
            assert_eq!(rec.reason, ONE_TIME_REASON);
        }
    }

    #[test]
    fn recurring_plans_suggest_standard_care() {
        for frequency in [Frequency::Weekly, Frequency::BiWeekly, Frequency::Monthly] {
            let rec = recommend_service(&request(ServiceType::DeepRefresh, PropertyType::Office, Some(frequency)));
            assert_eq!(rec.service_type, ServiceType::StandardHomeCare);
            assert_eq!(rec.reason, RECURRING_REASON);
        }
        // Recurring standard care is its own recommendation, but still via the recurring rule.
        let rec = recommend_service(&request(
            ServiceType::StandardHomeCare,
            PropertyType::Apartment,
            Some(Frequency::Weekly),
        ));
        assert_eq!(rec.service_type, ServiceType::StandardHomeCare);
        assert_eq!(rec.reason, RECURRING_REASON);
    }

    #[test]
    fn falls_back_to_the_selection() {
        let rec = recommend_service(&request(ServiceType::MoveInOut, PropertyType::Apartment, None));
        assert_eq!(rec.service_type, ServiceType::MoveInOut);
        assert_eq!(rec.reason, MATCHES_REASON);

        let rec = recommend_service(&request(
            ServiceType::StandardHomeCare,
            PropertyType::Home,
            Some(Frequency::TurnoverOnly),
        ));
        assert_eq!(rec.service_type, ServiceType::StandardHomeCare);
        assert_eq!(rec.reason, MATCHES_REASON);
    }

    #[test]
    fn same_input_same_answer() {
        let r = request(ServiceType::RoutinePropertyCare, PropertyType::GuestHouse, Some(Frequency::Monthly));
        assert_eq!(recommend_service(&r), recommend_service(&r));
    }
}
