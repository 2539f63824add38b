use super::models::{QuoteRequest, QuoteResult};
use super::pricing::price;
use super::recommend::recommend_service;

pub const TERMS: [&str; 4] = [
    "This quote is based on the details you provided (rooms, property type, and add-ons).",
    "We clean accessible areas; please secure fragile items if needed.",
    "If you request extra scope beyond this quote, we will confirm any added cost on WhatsApp before proceeding.",
    "By sending the WhatsApp message, you’re committing to this quoted service and price (we’ll reply to confirm date/time).",
];

pub fn compute_quote(request: &QuoteRequest) -> QuoteResult {
    let breakdown = price(request);
    let recommendation = recommend_service(request);

    QuoteResult {
        service_label: request.service_type.label(),
        recommended_service_type: recommendation.service_type,
        recommended_service_label: recommendation.service_label,
        recommendation_reason: recommendation.reason,
        line_items: breakdown.line_items,
        total: breakdown.total,
        terms: TERMS.to_vec(),
    }
}

impl QuoteResult {
    pub fn suggests_switch(&self, request: &QuoteRequest) -> bool {
        self.recommended_service_type != request.service_type
    }
}
