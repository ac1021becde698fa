pub mod attach_accept;
pub mod attach_request;
pub mod auth_cipher_request;
pub mod auth_cipher_response;
pub mod routing_area_update_accept;
pub mod routing_area_update_request;
pub mod service_request;
