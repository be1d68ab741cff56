pub mod preflight;
pub mod write_redirect;
