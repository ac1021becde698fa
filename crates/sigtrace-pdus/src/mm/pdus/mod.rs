pub mod authentication_request;
pub mod authentication_response;
pub mod cm_service_request;
pub mod identity_request;
pub mod identity_response;
pub mod imsi_detach_indication;
pub mod location_updating_accept;
pub mod location_updating_reject;
pub mod location_updating_request;
pub mod tmsi_reallocation_command;
