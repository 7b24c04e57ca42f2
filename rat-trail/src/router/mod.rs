//! Routing: path normalization, the route table and the navigator.

pub mod navigator;
pub mod table;

pub use navigator::{
    EventOutcome, HostEvent, Navigator, Shell, FOOTER_SLOT_ID, HEADER_SLOT_ID, PAGE_SLOT_ID,
};
pub use table::{normalize, RouteTable};
