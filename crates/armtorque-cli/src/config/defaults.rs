pub struct DefaultsConfig {
    pub payload_mass: f64,
    pub link_density: f64,
    pub body_length: f64,
    pub rpm: f64,
    pub gear_ratio: f64,
    pub safety_factor: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            payload_mass: 0.0,
            link_density: 2700.0,
            body_length: 0.0,
            rpm: 0.0,
            gear_ratio: 1.0,
            safety_factor: 1.0,
        }
    }
}
