#[path = "io/serialization.rs"]
mod serialization;
#[path = "io/svg.rs"]
mod svg;
