pub mod prelude;

pub mod artist;
pub mod show;
pub mod venue;
