pub mod channel_release;
pub mod ciphering_mode_command;
pub mod ciphering_mode_complete;
pub mod classmark_change;
pub mod paging_response;
pub mod system_information_6;
