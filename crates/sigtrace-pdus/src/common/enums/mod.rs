pub mod mi_type;
pub mod protocol_discriminator;
