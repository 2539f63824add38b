pub struct Business {
    pub name: &'static str,
    pub tagline: &'static str,
    /// International format without the plus sign, as wa.me expects.
    pub whatsapp_number: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub address: &'static str,
    pub service_area: &'static str,
    pub hours: &'static str,
}

pub const BUSINESS: Business = Business {
    name: "Tidy Bunny",
    tagline: "Premium cleaning for homes, hotels, and short-stays in Kumasi.",
    whatsapp_number: "233595236285",
    phone_display: "+233 59 523 6285",
    phone_href: "tel:+233595236285",
    address: "Estes Park Street, Kumasi",
    service_area: "Kumasi and nearby areas",
    hours: "Mon–Sat, 9am–6pm",
};

/// Short opener used by the plain "Message us" buttons outside the quote form.
pub const WHATSAPP_GREETING: &str = "Hi Tidy Bunny, I’d like to request a cleaning quote.";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
