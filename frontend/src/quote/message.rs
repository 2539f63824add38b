use crate::config::BUSINESS;

use super::composer::compute_quote;
use super::models::{ContactAndSchedule, QuoteRequest};
use super::pricing::clamp_rooms;

pub const SCHEDULE_SEPARATOR: &str = " • ";

pub const CLOSING_LINE: &str =
    "I confirm this quote and would like you to schedule the service. I can attach photos after sending.";

/// Formats whole cedis for display. Negative amounts show as zero; callers print the sign.
pub fn format_ghs(amount: i64) -> String {
    format!("GHS {}", amount.max(0))
}

fn schedule_line(request: &QuoteRequest, contact: &ContactAndSchedule) -> Option<String> {
    let parts: Vec<String> = [
        contact
            .preferred_date
            .map(|date| format!("Preferred date: {}", date.format("%Y-%m-%d"))),
        contact.time_window.map(|w| format!("Time: {}", w.label())),
        request.frequency.map(|f| format!("Frequency: {}", f.label())),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SCHEDULE_SEPARATOR))
    }
}

/// Renders the WhatsApp message for a request and the customer's details. The quote is
/// recomputed here so the message always matches the current form values.
pub fn build_quote_message(request: &QuoteRequest, contact: &ContactAndSchedule) -> String {
    let quote = compute_quote(request);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Hi {}, I’d like to book a cleaning using the quote below.",
        BUSINESS.name
    ));
    lines.push(String::new());
    lines.push(format!("Name: {}", contact.full_name));
    lines.push(format!("Phone/WhatsApp: {}", contact.phone));
    lines.push(String::new());
    lines.push("QUOTE (generated from your form)".to_string());
    lines.push(format!("Total: {}", format_ghs(quote.total)));
    lines.push(format!("Service: {}", quote.service_label));
    lines.push(format!("Recommended: {}", quote.recommended_service_label));
    lines.push(format!("Property: {}", request.property_type.label()));
    lines.push(format!(
        "Rooms: {} bed, {} bath",
        clamp_rooms(request.bedrooms),
        clamp_rooms(request.bathrooms)
    ));
    lines.push(format!("Location: {}", contact.location));
    if let Some(schedule) = schedule_line(request, contact) {
        lines.push(schedule);
    }

    if !quote.line_items.is_empty() {
        lines.push(String::new());
        lines.push("Breakdown:".to_string());
        for item in &quote.line_items {
            let sign = if item.amount < 0 { "-" } else { "" };
            lines.push(format!(
                "- {}: {}{}",
                item.label,
                sign,
                format_ghs(item.amount.abs())
            ));
        }
    }

    if let Some(notes) = contact.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        lines.push(String::new());
        lines.push(format!("Notes: {}", notes));
    }

    lines.push(String::new());
    lines.push("TERMS (summary)".to_string());
    for term in &quote.terms {
        lines.push(format!("- {}", term));
    }
    lines.push(String::new());
    lines.push(CLOSING_LINE.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::composer::TERMS;
    use crate::quote::models::{AddOn, AddOns, Frequency, PropertyType, ServiceType, TimeWindow};
    use chrono::NaiveDate;

    fn contact() -> ContactAndSchedule {
        ContactAndSchedule {
            full_name: "Ama Mensah".to_string(),
            phone: "059 123 4567".to_string(),
            location: "Ahodwo".to_string(),
            preferred_date: None,
            time_window: None,
            notes: None,
        }
    }

    #[test]
    fn formats_cedis() {
        assert_eq!(format_ghs(145), "GHS 145");
        assert_eq!(format_ghs(-30), "GHS 0");
    }

    #[test]
    fn full_message_layout() {
        let request = QuoteRequest::new(ServiceType::GuestReadyPresentation, PropertyType::Hotel, 1, 1)
            .with_frequency(Frequency::Weekly);
        let mut contact = contact();
        contact.preferred_date = NaiveDate::from_ymd_opt(2026, 3, 14);
        contact.time_window = Some(TimeWindow::Morning);
        contact.notes = Some("  focus on the kitchen  ".to_string());

        let message = build_quote_message(&request, &contact);
        let mut expected = vec![
            "Hi Tidy Bunny, I’d like to book a cleaning using the quote below.",
            "",
            "Name: Ama Mensah",
            "Phone/WhatsApp: 059 123 4567",
            "",
            "QUOTE (generated from your form)",
            "Total: GHS 270",
            "Service: Guest-Ready Presentation",
            "Recommended: Guest-Ready Presentation",
            "Property: Hotel",
            "Rooms: 1 bed, 1 bath",
            "Location: Ahodwo",
            "Preferred date: 2026-03-14 • Time: Morning • Frequency: Weekly",
            "",
            "Breakdown:",
            "- Guest-Ready Presentation (base): GHS 266",
            "- Property adjustment (112%): GHS 32",
            "- Recurring discount (-10%): -GHS 30",
            "- Rounding adjustment: GHS 2",
            "",
            "Notes: focus on the kitchen",
            "",
            "TERMS (summary)",
        ];
        let terms: Vec<String> = TERMS.iter().map(|t| format!("- {}", t)).collect();
        expected.extend(terms.iter().map(String::as_str));
        expected.push("");
        expected.push(CLOSING_LINE);

        assert_eq!(message, expected.join("\n"));
    }

    #[test]
    fn schedule_line_only_lists_what_is_set() {
        let request = QuoteRequest::new(ServiceType::DeepRefresh, PropertyType::Home, 2, 2);
        let message = build_quote_message(&request, &contact());
        assert!(!message.contains("Preferred date:"));
        assert!(!message.contains("Frequency:"));
        assert!(message.contains("Location: Ahodwo\n\nBreakdown:"));

        let mut with_time = contact();
        with_time.time_window = Some(TimeWindow::Flexible);
        let message = build_quote_message(&request.with_frequency(Frequency::TurnoverOnly), &with_time);
        assert!(message.contains("\nTime: Flexible • Frequency: Turnovers only (short-stay)\n"));
    }

    #[test]
    fn blank_notes_are_left_out() {
        let request = QuoteRequest::new(ServiceType::Turnover, PropertyType::Airbnb, 3, 2)
            .with_add_ons(AddOns::default().with(AddOn::Laundry));
        let mut contact = contact();
        contact.notes = Some("   \n ".to_string());
        let message = build_quote_message(&request, &contact);
        assert!(!message.contains("Notes:"));
        assert!(message.contains("- Add-on: Laundry (wash & fold): GHS 45"));
    }

    #[test]
    fn rooms_line_uses_clamped_counts() {
        let request = QuoteRequest::new(ServiceType::MoveInOut, PropertyType::Apartment, 45, -1);
        let message = build_quote_message(&request, &contact());
        assert!(message.contains("Rooms: 20 bed, 0 bath"));
    }

    #[test]
    fn message_is_deterministic() {
        let request = QuoteRequest::new(ServiceType::RoutinePropertyCare, PropertyType::GuestHouse, 4, 2)
            .with_frequency(Frequency::Monthly);
        assert_eq!(
            build_quote_message(&request, &contact()),
            build_quote_message(&request, &contact())
        );
    }
}
