//! Contact Card Component
//!
//! Profile picture (or a `?` placeholder), name heading and the contact's
//! email, phone and city.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use eframe::egui;
use crate::egui_app::theme::{colors, styles};
use crate::shared::contacts::{classify, decode_inline_image, Contact, ImageClass};

/// Side length of the profile picture
const PICTURE_SIZE: f32 = 72.0;

/// Render the card for `contact`
pub fn render(ui: &mut egui::Ui, contact: &Contact) {
    styles::contact_card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            render_picture(ui, contact);

            ui.add_space(12.0);

            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(contact.display_name())
                        .heading()
                        .color(colors::TEXT_DARK),
                );
                render_field(ui, "Email:", contact.email_or_default());
                if let Some(phone) = contact.phone() {
                    render_field(ui, "Phone:", phone);
                }
                if let Some(city) = contact.city() {
                    render_field(ui, "City:", city);
                }
            });
        });
    });
}

/// Image source the card loads the profile picture from
///
/// Remote URLs go to the http loader unchanged. Inline payloads are decoded
/// and handed over as `bytes://` sources keyed by a hash of the payload.
/// `None` means the placeholder is drawn.
pub fn picture_source(contact: &Contact) -> Option<egui::ImageSource<'static>> {
    let raw = contact.profile_picture.as_deref();
    match classify(raw) {
        ImageClass::RemoteUrl => raw.map(|url| egui::ImageSource::Uri(url.to_string().into())),
        ImageClass::InlineImage(_) => {
            let (mime, bytes) = decode_inline_image(raw)?;
            let mut hasher = DefaultHasher::new();
            raw.hash(&mut hasher);
            let uri = format!("bytes://profile/{:016x}.{}", hasher.finish(), mime.extension());
            Some(egui::ImageSource::Bytes {
                uri: uri.into(),
                bytes: bytes.into(),
            })
        }
        ImageClass::None => None,
    }
}

fn render_picture(ui: &mut egui::Ui, contact: &Contact) {
    match picture_source(contact) {
        Some(source) => {
            ui.add(
                egui::Image::new(source)
                    .fit_to_exact_size(egui::vec2(PICTURE_SIZE, PICTURE_SIZE))
                    .alt_text("Profile"),
            );
        }
        None => {
            styles::placeholder_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new("?")
                        .size(24.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
            });
        }
    }
}

fn render_field(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong().color(colors::TEXT_DARK));
        ui.colored_label(colors::TEXT_SECONDARY, value);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    fn contact_with_picture(picture: &str) -> Contact {
        Contact {
            profile_picture: Some(picture.to_string()),
            ..Contact::default()
        }
    }

    #[test]
    fn test_inline_picture_is_loadable_bytes() {
        let mut png = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
        png.extend(std::iter::repeat(7u8).take(100));
        let contact = contact_with_picture(&STANDARD.encode(&png));

        assert_matches!(
            picture_source(&contact),
            Some(egui::ImageSource::Bytes { uri, bytes })
                if uri.starts_with("bytes://profile/")
                    && uri.ends_with(".png")
                    && &bytes[..] == png.as_slice()
        );
    }

    #[test]
    fn test_jpeg_picture_uri_extension() {
        let mut jpeg = vec![0xff, 0xd8, 0xff, 0xe0];
        jpeg.extend(std::iter::repeat(1u8).take(100));
        let contact = contact_with_picture(&STANDARD.encode(&jpeg));

        assert_matches!(
            picture_source(&contact),
            Some(egui::ImageSource::Bytes { uri, .. }) if uri.ends_with(".jpg")
        );
    }

    #[test]
    fn test_remote_picture_is_uri() {
        let contact = contact_with_picture("https://cdn.example.com/a.png");
        assert_matches!(
            picture_source(&contact),
            Some(egui::ImageSource::Uri(uri)) if uri == "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_undecodable_picture_falls_back_to_placeholder() {
        let contact = contact_with_picture(&format!("iVBOR{}", "!".repeat(150)));
        assert!(picture_source(&contact).is_none());
        assert!(picture_source(&Contact::default()).is_none());
    }
}
