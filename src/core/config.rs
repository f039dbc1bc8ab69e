#[derive(Debug, Clone)]
pub struct Config {
    pub worker_count: usize,
    pub service_bind: String,
    pub service_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            worker_count: num_cpus::get(),
            service_bind: "0.0.0.0:8080".to_string(),
            // Datagram bound of the original transport; responses are
            // truncated to this size.
            service_buffer_size: 4096,
        }
    }
}
