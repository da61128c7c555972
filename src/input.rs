use tilt_core::{CardGeometry, PointerSample};
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn offset_within(client_x: f64, client_y: f64, left: f64, top: f64) -> PointerSample {
    PointerSample::new((client_x - left) as f32, (client_y - top) as f32)
}

/// Pointer position relative to `el`'s top-left corner, in CSS pixels.
#[inline]
pub fn pointer_offset(ev: &web::PointerEvent, el: &web::Element) -> PointerSample {
    let rect = el.get_bounding_client_rect();
    offset_within(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}

#[inline]
pub fn element_geometry(el: &web::HtmlElement) -> CardGeometry {
    CardGeometry::new(el.client_width() as f32, el.client_height() as f32)
}

#[inline]
pub fn fmt_sample(sample: PointerSample) -> String {
    format!("({:.1},{:.1})", sample.x, sample.y)
}
