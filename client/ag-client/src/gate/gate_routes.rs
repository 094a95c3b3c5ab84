pub const DEFAULT_LANDING_ROUTE: &str = "/";
pub const DEFAULT_REGISTER_ROUTE: &str = "/register";
pub const DEFAULT_DASHBOARD_ROUTE: &str = "/dashboard";

/// The three routes the gate knows about. Every other path is protected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRoutes {
    /// Public login page
    pub landing: String,
    /// Public registration page
    pub register: String,
    /// Where authenticated users land
    pub dashboard: String,
}

impl Default for GateRoutes {
    fn default() -> Self {
        Self {
            landing: DEFAULT_LANDING_ROUTE.to_string(),
            register: DEFAULT_REGISTER_ROUTE.to_string(),
            dashboard: DEFAULT_DASHBOARD_ROUTE.to_string(),
        }
    }
}
