pub mod ohms_law;
pub mod sensible_heat;
