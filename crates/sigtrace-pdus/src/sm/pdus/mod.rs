pub mod activate_pdp_context_accept;
