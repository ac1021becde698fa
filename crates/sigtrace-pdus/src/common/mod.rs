pub mod enums;
pub mod fields;
