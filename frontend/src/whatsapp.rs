use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;

pub const WA_ME_BASE: &str = "https://wa.me/";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_clipboard_text(text: &str) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Trims whitespace and byte-order marks from both ends, the same set browsers strip.
fn trim_message(message: &str) -> &str {
    message.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// `https://wa.me/<digits>[?text=<message>]`. Every non-digit is dropped from the
/// number; a blank message produces no query string at all.
pub fn build_whatsapp_url(phone_number: &str, message: &str) -> String {
    let digits: String = phone_number.chars().filter(|c| c.is_ascii_digit()).collect();
    let text = trim_message(message);
    if text.is_empty() {
        format!("{}{}", WA_ME_BASE, digits)
    } else {
        format!("{}{}?text={}", WA_ME_BASE, digits, urlencoding::encode(text))
    }
}

/// Logs a failed browser call. Returns whether it succeeded.
fn warn_on_err<E: std::fmt::Debug>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to {}: {:?}", action, e);
            false
        }
    }
}

/// Hands the chat off to WhatsApp in a new tab, or in this tab if the popup is blocked.
/// Nothing comes back from WhatsApp, so there is nothing to await.
pub fn open_whatsapp(url: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window available to open WhatsApp");
        return;
    };

    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(tab)) => {
            // Detach the new tab from this page.
            warn_on_err(tab.set_opener(&JsValue::NULL), "detach WhatsApp tab");
            info!("Opened WhatsApp in a new tab");
        }
        Ok(None) | Err(_) => {
            info!("Popup blocked, redirecting to WhatsApp");
            warn_on_err(window.location().set_href(url), "redirect to WhatsApp");
        }
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    write_clipboard_text(text)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_but_digits() {
        assert_eq!(
            build_whatsapp_url("+233 59 523 6285", ""),
            "https://wa.me/233595236285"
        );
        assert_eq!(
            build_whatsapp_url("(059) 523-6285", ""),
            "https://wa.me/0595236285"
        );
    }

    #[test]
    fn blank_message_has_no_query() {
        assert_eq!(build_whatsapp_url("233595236285", "   \n\t"), "https://wa.me/233595236285");
    }

    #[test]
    fn byte_order_marks_are_trimmed_like_whitespace() {
        assert_eq!(build_whatsapp_url("233595236285", "\u{feff}"), "https://wa.me/233595236285");
        assert_eq!(
            build_whatsapp_url("233595236285", "\u{feff} Hi \u{feff}"),
            "https://wa.me/233595236285?text=Hi"
        );
    }

    #[test]
    fn failed_browser_calls_are_reported() {
        assert!(warn_on_err(Ok::<(), &str>(()), "detach WhatsApp tab"));
        assert!(!warn_on_err(Err("SecurityError"), "detach WhatsApp tab"));
    }

    #[test]
    fn message_goes_in_text_param() {
        assert_eq!(
            build_whatsapp_url("233595236285", "Hi"),
            "https://wa.me/233595236285?text=Hi"
        );
    }

    #[test]
    fn message_is_trimmed_and_percent_encoded() {
        let url = build_whatsapp_url("233595236285", "  Total: GHS 145\nService: Deep & more • ok  ");
        assert_eq!(
            url,
            "https://wa.me/233595236285?text=Total%3A%20GHS%20145%0AService%3A%20Deep%20%26%20more%20%E2%80%A2%20ok"
        );
    }

    #[test]
    fn encoded_message_decodes_back_to_the_message() {
        let message = "Hi Tidy Bunny, I’d like to book a cleaning.\n\n- Rounding adjustment: -GHS 2";
        let url = build_whatsapp_url("233595236285", message);
        let encoded = url.split_once("?text=").map(|(_, q)| q).unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), message);
    }
}
