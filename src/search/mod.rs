pub mod results;
pub mod pipeline;
