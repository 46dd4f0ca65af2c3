//! Site-wide constants shown in the nav, contact section and footer.

pub const BRAND: &str = "Kaamkarlo.com";
pub const COMPANY_NAME: &str = "The Client Company";
pub const PHONE: &str = "+91 98765 43210";
pub const EMAIL: &str = "info@theclientcompany.com";
pub const LOCATION: &str = "Serving all sectors of Chandigarh & Mohali";
pub const ADDRESS: &str = "Sector 17, Chandigarh, India";
pub const WORKING_HOURS: &str = "Mon - Sat: 8:00 AM - 7:00 PM";
pub const EMERGENCY_HOURS: &str = "Emergency: 24/7 Available";
