pub mod auth_gate;
pub mod decide;
pub mod gate_routes;
