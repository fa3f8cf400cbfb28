mod availability;
mod bounds;
mod ingestion;
mod orchestrator;
mod presets;
mod registry;
mod scenario;
mod totality;
pub mod support;
