pub mod enums;
pub mod pdus;
