pub mod gmm_msg_type;
