//! Page-space to machine-space coordinate mapping.
//!
//! Page space has its origin at the top-left sheet corner with Y down;
//! machine space has Y up, with the origin at the sheet edge or, for
//! delta-style machines, at the sheet centre. Both directions are pure
//! total functions.

use dotpress_types::DeviceGeometry;

/// Map a page-space point to machine space.
pub fn page_to_machine(x: f64, y: f64, geometry: &DeviceGeometry) -> (f64, f64) {
    let mut mx = geometry.paper_width - x;
    let my = if geometry.center_origin {
        mx -= geometry.paper_width / 2.0;
        -y + geometry.paper_height / 2.0
    } else {
        geometry.paper_height - y
    };
    (mx, my)
}

/// Analytic inverse of [`page_to_machine`].
pub fn machine_to_page(mx: f64, my: f64, geometry: &DeviceGeometry) -> (f64, f64) {
    if geometry.center_origin {
        (
            geometry.paper_width - (mx + geometry.paper_width / 2.0),
            geometry.paper_height / 2.0 - my,
        )
    } else {
        (geometry.paper_width - mx, geometry.paper_height - my)
    }
}
