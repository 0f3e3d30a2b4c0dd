use chrono::NaiveDateTime;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub genres: Vec<String>,
    pub phone: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub created_at: NaiveDateTime,
}

/// Mutable fields of a venue, already validated. Creates insert one,
/// edits overwrite all of them at once.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct VenueDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub genres: Vec<String>,
    pub phone: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}
