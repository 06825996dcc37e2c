//! Section validators for the party, collection and transport parts of a row
//!
//! Each validator reads its own fields from a [`NormalizedRow`](crate::app::models::NormalizedRow)
//! and returns either the typed section value or every field error it found.
//! Validators never short-circuit: one pass reports all problems in a section.

pub mod carrier;
pub mod fields;
pub mod producer;
pub mod receiver;
pub mod waste_collection;
pub mod waste_transportation;

#[cfg(test)]
pub mod tests;

pub use carrier::validate_carrier;
pub use fields::SectionFields;
pub use producer::validate_producer;
pub use receiver::validate_receiver;
pub use waste_collection::{WasteCollectionSection, parse_collection_date, validate_waste_collection};
pub use waste_transportation::validate_waste_transportation;
