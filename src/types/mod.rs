pub mod dto;
pub mod overpass;
pub mod record;
