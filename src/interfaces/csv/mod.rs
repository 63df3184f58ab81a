//! CSV adapters: booking-request input, decision output, and the catalog
//! seed files for properties and existing reservations.

pub mod catalog;
pub mod decision_writer;
pub mod request_reader;
