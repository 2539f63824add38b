use super::models::{AddOn, Frequency, LineItem, PropertyType, QuoteRequest, ServiceType};

pub const MAX_ROOMS: i32 = 20;
pub const TOTAL_INCREMENT: f64 = 5.0;

const MULTIPLIER_EPSILON: f64 = 0.001;

impl ServiceType {
    /// Base price for the service before property and frequency adjustments.
    /// Room counts must already be clamped.
    pub fn base_price(self, beds: i32, baths: i32) -> i64 {
        let (fixed, per_bed, per_bath) = match self {
            ServiceType::StandardHomeCare => (95, 18, 14),
            ServiceType::DeepRefresh => (170, 30, 22),
            ServiceType::MoveInOut => (190, 34, 26),
            ServiceType::Turnover => (140, 24, 18),
            ServiceType::GuestReadyPresentation => (210, 32, 24),
            ServiceType::RoutinePropertyCare => (120, 20, 16),
        };
        fixed + per_bed * i64::from(beds) + per_bath * i64::from(baths)
    }
}

impl PropertyType {
    pub fn multiplier(self) -> f64 {
        match self {
            PropertyType::Home => 1.0,
            PropertyType::Apartment => 0.95,
            PropertyType::Airbnb => 1.0,
            PropertyType::Hotel => 1.12,
            PropertyType::GuestHouse => 1.06,
            PropertyType::Office => 1.18,
            PropertyType::Other => 1.08,
        }
    }
}

impl Frequency {
    pub fn discount_rate(self) -> f64 {
        match self {
            Frequency::OneTime => 0.0,
            Frequency::Weekly => 0.10,
            Frequency::BiWeekly => 0.05,
            Frequency::Monthly => 0.02,
            Frequency::TurnoverOnly => 0.0,
        }
    }
}

impl AddOn {
    pub fn fee(self) -> i64 {
        match self {
            AddOn::InteriorWindows => 35,
            AddOn::Laundry => 45,
            AddOn::FridgeOven => 70,
            AddOn::EdgesDetails => 50,
        }
    }
}

/// Half-up rounding, matching how browsers round (`-2.5` goes to `-2`).
pub fn round_half_up(amount: f64) -> i64 {
    if !amount.is_finite() {
        return 0;
    }
    (amount + 0.5).floor() as i64
}

pub fn round_to_nearest(amount: f64, nearest: f64) -> i64 {
    if !amount.is_finite() {
        return 0;
    }
    round_half_up(amount / nearest) * nearest as i64
}

pub fn clamp_rooms(count: i32) -> i32 {
    count.clamp(0, MAX_ROOMS)
}

/// Itemized price of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub line_items: Vec<LineItem>,
    pub total: i64,
}

/// Prices a request: base, property adjustment, recurring discount, add-ons, then a
/// rounding entry so the items always add up to the total.
pub fn price(request: &QuoteRequest) -> PriceBreakdown {
    let beds = clamp_rooms(request.bedrooms);
    let baths = clamp_rooms(request.bathrooms);
    let service_label = request.service_type.label();

    let base = request.service_type.base_price(beds, baths);
    let multiplier = request.property_type.multiplier();
    let property_adjusted = base as f64 * multiplier;

    let discount_rate = request.effective_frequency().discount_rate();
    let discount = property_adjusted * discount_rate;

    let add_on_total: i64 = request.add_ons.active().map(AddOn::fee).sum();

    let before_round = property_adjusted - discount + add_on_total as f64;
    let total = round_to_nearest(before_round, TOTAL_INCREMENT);

    let mut line_items = vec![LineItem::new(format!("{} (base)", service_label), base)];

    if (multiplier - 1.0).abs() > MULTIPLIER_EPSILON {
        line_items.push(LineItem::new(
            format!("Property adjustment ({}%)", round_half_up(multiplier * 100.0)),
            round_half_up(property_adjusted - base as f64),
        ));
    }

    if discount_rate > 0.0 {
        line_items.push(LineItem::new(
            format!("Recurring discount (-{}%)", round_half_up(discount_rate * 100.0)),
            -round_half_up(discount),
        ));
    }

    for add_on in request.add_ons.active() {
        line_items.push(LineItem::new(format!("Add-on: {}", add_on.label()), add_on.fee()));
    }

    let items_sum: i64 = line_items.iter().map(|item| item.amount).sum();
    let rounding = total - items_sum;
    if rounding != 0 {
        line_items.push(LineItem::new("Rounding adjustment", rounding));
    }

    PriceBreakdown { line_items, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::models::AddOns;

    fn every_request() -> Vec<QuoteRequest> {
        let add_on_sets = [
            AddOns::default(),
            AddOns::default().with(AddOn::Laundry),
            AddOns::default().with(AddOn::InteriorWindows).with(AddOn::FridgeOven),
            AddOns {
                interior_windows: true,
                laundry: true,
                fridge_oven: true,
                edges_details: true,
            },
        ];
        let frequencies = [
            None,
            Some(Frequency::OneTime),
            Some(Frequency::Weekly),
            Some(Frequency::BiWeekly),
            Some(Frequency::Monthly),
            Some(Frequency::TurnoverOnly),
        ];

        let mut requests = Vec::new();
        for service in ServiceType::ALL {
            for property in PropertyType::ALL {
                for frequency in frequencies {
                    for add_ons in add_on_sets {
                        for (beds, baths) in [(0, 0), (1, 1), (2, 1), (3, 2), (7, 5), (20, 20)] {
                            let mut request = QuoteRequest::new(service, property, beds, baths)
                                .with_add_ons(add_ons);
                            request.frequency = frequency;
                            requests.push(request);
                        }
                    }
                }
            }
        }
        requests
    }

    #[test]
    fn line_items_always_sum_to_total() {
        for request in every_request() {
            let breakdown = price(&request);
            let sum: i64 = breakdown.line_items.iter().map(|i| i.amount).sum();
            assert_eq!(sum, breakdown.total, "{:?}", request);
        }
    }

    #[test]
    fn total_is_a_non_negative_multiple_of_five() {
        for request in every_request() {
            let total = price(&request).total;
            assert_eq!(total % 5, 0, "{:?}", request);
            assert!(total >= 0);
        }
    }

    #[test]
    fn base_price_grows_with_rooms() {
        for service in ServiceType::ALL {
            for rooms in 0..MAX_ROOMS {
                assert!(service.base_price(rooms + 1, 1) > service.base_price(rooms, 1));
                assert!(service.base_price(1, rooms + 1) > service.base_price(1, rooms));
            }
        }
    }

    #[test]
    fn recurring_discounts_are_ordered() {
        assert!(Frequency::Weekly.discount_rate() > Frequency::BiWeekly.discount_rate());
        assert!(Frequency::BiWeekly.discount_rate() > Frequency::Monthly.discount_rate());
        assert!(Frequency::Monthly.discount_rate() > Frequency::OneTime.discount_rate());
        assert_eq!(Frequency::OneTime.discount_rate(), 0.0);
        assert_eq!(Frequency::TurnoverOnly.discount_rate(), 0.0);

        for service in ServiceType::ALL {
            for property in PropertyType::ALL {
                let total = |f: Frequency| {
                    price(&QuoteRequest::new(service, property, 3, 2).with_frequency(f)).total
                };
                assert!(total(Frequency::Weekly) <= total(Frequency::BiWeekly));
                assert!(total(Frequency::BiWeekly) <= total(Frequency::Monthly));
                assert!(total(Frequency::Monthly) <= total(Frequency::OneTime));
            }
        }
    }

    #[test]
    fn add_ons_raise_total_by_their_fee() {
        // A request whose unrounded subtotal is already a multiple of five, so
        // rounding doesn't blur the comparison.
        let plain = QuoteRequest::new(ServiceType::StandardHomeCare, PropertyType::Home, 2, 1);
        let plain_total = price(&plain).total;
        assert_eq!(plain_total, 145);

        for add_on in AddOn::ALL {
            let with_one = plain.clone().with_add_ons(AddOns::default().with(add_on));
            assert_eq!(price(&with_one).total, plain_total + add_on.fee());
        }

        let all = AddOns::default()
            .with(AddOn::InteriorWindows)
            .with(AddOn::Laundry)
            .with(AddOn::FridgeOven)
            .with(AddOn::EdgesDetails);
        let fees: i64 = AddOn::ALL.into_iter().map(AddOn::fee).sum();
        assert_eq!(price(&plain.with_add_ons(all)).total, plain_total + fees);
    }

    #[test]
    fn add_ons_stay_within_rounding_of_their_fee() {
        for request in every_request() {
            let bare = request.clone().with_add_ons(AddOns::default());
            let fees: i64 = request.add_ons.active().map(AddOn::fee).sum();
            let diff = price(&request).total - price(&bare).total;
            assert!((diff - fees).abs() <= 5, "{:?}", request);
        }
    }

    #[test]
    fn room_counts_are_clamped() {
        let base = QuoteRequest::new(ServiceType::DeepRefresh, PropertyType::Office, 20, 3)
            .with_frequency(Frequency::Monthly);
        let mut huge = base.clone();
        huge.bedrooms = 999;
        assert_eq!(price(&huge), price(&base));

        let zero = QuoteRequest::new(ServiceType::DeepRefresh, PropertyType::Office, 0, 3);
        let mut negative = zero.clone();
        negative.bedrooms = -5;
        assert_eq!(price(&negative), price(&zero));
    }

    #[test]
    fn standard_home_two_bed_one_bath() {
        let request = QuoteRequest::new(ServiceType::StandardHomeCare, PropertyType::Home, 2, 1)
            .with_frequency(Frequency::OneTime);
        let breakdown = price(&request);
        assert_eq!(breakdown.total, 145);
        assert_eq!(
            breakdown.line_items,
            vec![LineItem::new("Standard Home Care (base)", 145)]
        );
    }

    #[test]
    fn airbnb_turnover_with_add_ons() {
        let request = QuoteRequest::new(ServiceType::Turnover, PropertyType::Airbnb, 3, 2)
            .with_frequency(Frequency::TurnoverOnly)
            .with_add_ons(AddOns::default().with(AddOn::InteriorWindows).with(AddOn::Laundry));
        let breakdown = price(&request);
        assert_eq!(breakdown.total, 330);
        assert_eq!(
            breakdown.line_items,
            vec![
                LineItem::new("Turnover Cleaning (Short-Stay) (base)", 248),
                LineItem::new("Add-on: Interior windows", 35),
                LineItem::new("Add-on: Laundry (wash & fold)", 45),
                LineItem::new("Rounding adjustment", 2),
            ]
        );
    }

    #[test]
    fn weekly_guest_ready_hotel() {
        let request = QuoteRequest::new(
            ServiceType::GuestReadyPresentation,
            PropertyType::Hotel,
            1,
            1,
        )
        .with_frequency(Frequency::Weekly);
        let breakdown = price(&request);
        // 266 * 1.12 = 297.92, less 10% = 268.128, rounds to 270.
        assert_eq!(breakdown.total, 270);
        assert_eq!(
            breakdown.line_items,
            vec![
                LineItem::new("Guest-Ready Presentation (base)", 266),
                LineItem::new("Property adjustment (112%)", 32),
                LineItem::new("Recurring discount (-10%)", -30),
                LineItem::new("Rounding adjustment", 2),
            ]
        );
    }

    #[test]
    fn apartment_adjustment_rounds_half_up() {
        // 170 * 0.95 = 161.5, so the delta of -8.5 rounds up to -8.
        let request = QuoteRequest::new(ServiceType::DeepRefresh, PropertyType::Apartment, 0, 0);
        let breakdown = price(&request);
        assert_eq!(breakdown.total, 160);
        assert_eq!(
            breakdown.line_items,
            vec![
                LineItem::new("Deep Refresh (base)", 170),
                LineItem::new("Property adjustment (95%)", -8),
                LineItem::new("Rounding adjustment", -2),
            ]
        );
    }

    #[test]
    fn half_up_rounding() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-7.6), -8);
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_to_nearest(327.5, 5.0), 330);
        assert_eq!(round_to_nearest(142.5, 5.0), 145);
        assert_eq!(round_to_nearest(142.4, 5.0), 140);
        assert_eq!(round_to_nearest(f64::INFINITY, 5.0), 0);
    }
}
