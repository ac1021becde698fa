pub mod auth_flavour;
pub mod cm_service_type;
pub mod mm_msg_type;
