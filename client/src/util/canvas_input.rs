//! Pointer event to canvas coordinate conversion.
//!
//! The canvas element has fixed backing dimensions but is scaled by CSS, so
//! raw offsets must be rescaled into backing-store coordinates before they
//! reach the editor engine.

#[cfg(feature = "hydrate")]
use canvas::geom::Point;
#[cfg(feature = "hydrate")]
use web_sys::HtmlCanvasElement;

/// Convert a mouse event position into canvas backing-store coordinates.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn pointer_point(ev: &leptos::ev::MouseEvent, canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 {
        f64::from(canvas.width()) / rect.width()
    } else {
        1.0
    };
    let scale_y = if rect.height() > 0.0 {
        f64::from(canvas.height()) / rect.height()
    } else {
        1.0
    };
    Point {
        x: f64::from(ev.offset_x()) * scale_x,
        y: f64::from(ev.offset_y()) * scale_y,
    }
}
