use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Deserialize;

use crate::artist::ArtistDraft;
use crate::show::NewShow;
use crate::venue::VenueDraft;

/// One invalid field on a submitted form.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| {
        Regex::new(r"^[0-9+()\-. ]{7,25}$").expect("static phone pattern")
    })
}

fn required(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, "is required"));
    }
    value.to_string()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn genre_list(
    genres: Vec<String>,
    errors: &mut Vec<FieldError>,
) -> Vec<String> {
    let genres: Vec<String> = genres
        .into_iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect();
    if genres.is_empty() {
        errors.push(FieldError::new("genres", "pick at least one genre"));
    }
    genres
}

fn phone_field(phone: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let phone = optional(phone)?;
    if !phone_pattern().is_match(&phone) {
        errors.push(FieldError::new("phone", "is not a valid phone number"));
        return None;
    }
    Some(phone)
}

/// Raw venue form body. Checkbox fields arrive as `"y"` when ticked and
/// are absent otherwise; the multi-select arrives as repeated `genres` keys.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    pub fn validate(self) -> Result<VenueDraft, Vec<FieldError>> {
        let mut errors = vec![];

        let draft = VenueDraft {
            name: required("name", &self.name, &mut errors),
            city: required("city", &self.city, &mut errors),
            state: required("state", &self.state, &mut errors),
            address: optional(&self.address),
            genres: genre_list(self.genres, &mut errors),
            phone: phone_field(&self.phone, &mut errors),
            image_link: required("image_link", &self.image_link, &mut errors),
            facebook_link: optional(&self.facebook_link),
            website_link: optional(&self.website_link),
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: self.seeking_description.trim().to_string(),
        };

        if errors.is_empty() {
            Ok(draft)
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validate(self) -> Result<ArtistDraft, Vec<FieldError>> {
        let mut errors = vec![];

        let draft = ArtistDraft {
            name: required("name", &self.name, &mut errors),
            city: required("city", &self.city, &mut errors),
            state: required("state", &self.state, &mut errors),
            genres: genre_list(self.genres, &mut errors),
            phone: phone_field(&self.phone, &mut errors),
            image_link: required("image_link", &self.image_link, &mut errors),
            facebook_link: optional(&self.facebook_link),
            website_link: optional(&self.website_link),
            seeking_venue: self.seeking_venue.is_some(),
            seeking_description: self.seeking_description.trim().to_string(),
        };

        if errors.is_empty() {
            Ok(draft)
        } else {
            Err(errors)
        }
    }
}

// Prefills the edit form from a stored venue.
impl From<crate::venue::Venue> for VenueForm {
    fn from(value: crate::venue::Venue) -> Self {
        Self {
            name: value.name,
            city: value.city,
            state: value.state,
            address: value.address.unwrap_or_default(),
            genres: value.genres,
            phone: value.phone.unwrap_or_default(),
            image_link: value.image_link,
            facebook_link: value.facebook_link.unwrap_or_default(),
            website_link: value.website_link.unwrap_or_default(),
            seeking_talent: value.seeking_talent.then(|| "y".to_string()),
            seeking_description: value.seeking_description,
        }
    }
}

impl From<crate::artist::Artist> for ArtistForm {
    fn from(value: crate::artist::Artist) -> Self {
        Self {
            name: value.name,
            city: value.city,
            state: value.state,
            genres: value.genres,
            phone: value.phone.unwrap_or_default(),
            image_link: value.image_link,
            facebook_link: value.facebook_link.unwrap_or_default(),
            website_link: value.website_link.unwrap_or_default(),
            seeking_venue: value.seeking_venue.then(|| "y".to_string()),
            seeking_description: value.seeking_description,
        }
    }
}

const START_TIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    pub fn validate(self) -> Result<NewShow, Vec<FieldError>> {
        let mut errors = vec![];

        let artist_id = id_field("artist_id", &self.artist_id, &mut errors);
        let venue_id = id_field("venue_id", &self.venue_id, &mut errors);
        let start_time = start_time_field(&self.start_time, &mut errors);

        if errors.is_empty() {
            Ok(NewShow {
                artist_id,
                venue_id,
                start_time,
            })
        } else {
            Err(errors)
        }
    }
}

fn id_field(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> i32 {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => id,
        _ => {
            errors.push(FieldError::new(field, "must be a positive id"));
            0
        }
    }
}

fn start_time_field(
    value: &str,
    errors: &mut Vec<FieldError>,
) -> NaiveDateTime {
    let value = value.trim();
    for format in START_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return parsed;
        }
    }
    errors.push(FieldError::new("start_time", "is not a valid date and time"));
    NaiveDateTime::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue_form() -> VenueForm {
        VenueForm {
            name: "The Fillmore".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1805 Geary Blvd".to_string(),
            genres: vec!["Jazz".to_string(), "Rock".to_string()],
            phone: "415-555-0132".to_string(),
            image_link: "https://example.com/fillmore.jpg".to_string(),
            facebook_link: String::new(),
            website_link: String::new(),
            seeking_talent: Some("y".to_string()),
            seeking_description: "Always booking".to_string(),
        }
    }

    #[test]
    fn valid_venue_form_maps_every_field() {
        let draft = venue_form().validate().unwrap();

        assert_eq!(draft.name, "The Fillmore");
        assert_eq!(draft.address.as_deref(), Some("1805 Geary Blvd"));
        assert_eq!(draft.genres, vec!["Jazz", "Rock"]);
        assert_eq!(draft.phone.as_deref(), Some("415-555-0132"));
        assert!(draft.facebook_link.is_none());
        assert!(draft.seeking_talent);
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let mut form = venue_form();
        form.name = "  ".to_string();
        form.image_link = String::new();

        let errors = form.validate().unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "image_link"]);
    }

    #[test]
    fn empty_genre_selection_is_rejected() {
        let mut form = venue_form();
        form.genres = vec![String::new()];

        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].field, "genres");
    }

    #[test]
    fn bad_phone_number_is_rejected_but_blank_is_allowed() {
        let mut form = venue_form();
        form.phone = "call me".to_string();
        assert_eq!(form.validate().unwrap_err()[0].field, "phone");

        let mut form = venue_form();
        form.phone = String::new();
        assert!(form.validate().unwrap().phone.is_none());
    }

    #[test]
    fn unchecked_seeking_box_defaults_to_false() {
        let mut form = venue_form();
        form.seeking_talent = None;
        assert!(!form.validate().unwrap().seeking_talent);
    }

    #[test]
    fn show_form_accepts_datetime_local_input() {
        let form = ShowForm {
            artist_id: "3".to_string(),
            venue_id: "7".to_string(),
            start_time: "2026-09-01T20:30".to_string(),
        };

        let show = form.validate().unwrap();
        assert_eq!(show.artist_id, 3);
        assert_eq!(show.venue_id, 7);
        assert_eq!(show.start_time.format("%H:%M").to_string(), "20:30");
    }

    #[test]
    fn show_form_rejects_garbage_ids_and_times() {
        let form = ShowForm {
            artist_id: "abc".to_string(),
            venue_id: "0".to_string(),
            start_time: "next friday".to_string(),
        };

        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["artist_id", "venue_id", "start_time"]);
    }
}
