use serde::{Deserialize, Serialize};

use crate::models::Location;

/// Content for the platform share capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Google Maps directions deep link for a location's street address
pub fn directions_url(location: &Location) -> String {
    let destination = format!("{}, {}", location.address, location.city);
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={}",
        urlencoding::encode(&destination)
    )
}

/// Share content for a location: title, a one-line pitch, and the
/// location's public page
pub fn share_payload(location: &Location, public_url: &str) -> SharePayload {
    let text = match &location.description {
        Some(description) => format!("{} — {}", location.name, description),
        None => format!("{} in {}", location.name, location.city),
    };

    SharePayload {
        title: location.name.clone(),
        text,
        url: format!(
            "{}/locations/{}",
            public_url.trim_end_matches('/'),
            location.id
        ),
    }
}

/// Multi-line text block used as the clipboard fallback when the platform
/// share capability is unavailable
pub fn clipboard_text(location: &Location) -> String {
    let mut lines = vec![
        location.name.clone(),
        format!("{}, {}", location.address, location.city),
    ];

    if let Some(description) = &location.description {
        lines.push(description.clone());
    }
    if let Some(tip) = &location.insider_tips {
        lines.push(format!("Tip: {}", tip));
    }

    lines.join("\n")
}
