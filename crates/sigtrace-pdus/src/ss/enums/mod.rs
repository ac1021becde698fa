pub mod ss_msg_type;
