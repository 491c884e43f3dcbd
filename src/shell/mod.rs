// Composition root for the albums service.
//
// Responsibilities
// - Read config from the environment.
// - Set up logging.
// - Instantiate the album repository and wire it into the HTTP and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod telemetry;
