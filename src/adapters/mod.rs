// Adapters layer: the input file, the output file and the lookup service.

pub mod csv_input;
pub mod csv_output;
pub mod http_status;

pub use csv_input::InputReader;
pub use csv_output::OutputWriter;
pub use http_status::{HttpStatusFetcher, DEFAULT_API_BASE_URL};
