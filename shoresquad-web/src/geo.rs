//! Best-effort geolocation capture.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use shoresquad_core::GeoPoint;

/// Ask the browser for the user's position once and hand it to `on_fix`.
///
/// Denied permission or an unavailable API is logged and otherwise ignored;
/// the app works the same without a fix.
pub fn request_user_location(on_fix: impl Fn(GeoPoint) + 'static) {
    let Some(geolocation) = web_sys::window()
        .map(|win| win.navigator())
        .and_then(|nav| nav.geolocation().ok())
    else {
        log::info!("geolocation API unavailable");
        return;
    };

    let success = Closure::wrap(Box::new(move |position: web_sys::Position| {
        let coords = position.coords();
        on_fix(GeoPoint {
            lat: coords.latitude(),
            lng: coords.longitude(),
        });
    }) as Box<dyn Fn(web_sys::Position)>);
    let error = Closure::wrap(Box::new(move |_err: web_sys::PositionError| {
        log::info!("geolocation permission denied or unavailable");
    }) as Box<dyn Fn(web_sys::PositionError)>);

    match geolocation.get_current_position_with_error_callback(
        success.as_ref().unchecked_ref(),
        Some(error.as_ref().unchecked_ref()),
    ) {
        Ok(()) => {
            // The browser owns these callbacks now.
            success.forget();
            error.forget();
        }
        Err(e) => log::info!(
            "geolocation request failed: {}",
            crate::dom::js_error_message(&e)
        ),
    }
}
