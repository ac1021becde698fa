pub mod envelope;
pub mod lapdm_header;
