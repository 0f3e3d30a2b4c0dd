pub mod artist;
pub mod form;
pub mod show;
pub mod venue;

pub mod prelude {
    pub use crate::artist::{Artist as ArtistEntity, ArtistDraft};
    pub use crate::form::{ArtistForm, FieldError, ShowForm, VenueForm};
    pub use crate::show::{NewShow, Show as ShowEntity};
    pub use crate::venue::{Venue as VenueEntity, VenueDraft};
}
