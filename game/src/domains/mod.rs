pub mod hosting;
pub mod spawning;
pub mod teaming;
