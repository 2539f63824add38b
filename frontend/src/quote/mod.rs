//! Quote engine: pricing, service recommendation, and the WhatsApp message that carries
//! the quote to the business. Everything here is pure and cheap enough to rerun on
//! every keystroke.

pub mod composer;
pub mod form;
pub mod message;
pub mod models;
pub mod pricing;
pub mod recommend;

pub use composer::compute_quote;
pub use form::{Field, FormErrors, QuoteForm};
pub use message::format_ghs;
pub use models::{
    AddOn, AddOns, Frequency, PropertyType, QuoteRequest, QuoteResult, ServiceType, TimeWindow,
};
