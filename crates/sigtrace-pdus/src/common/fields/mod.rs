pub mod bcd_number;
pub mod classmark;
pub mod ie_scan;
pub mod l3_header;
pub mod location_area_id;
pub mod mobile_identity;
