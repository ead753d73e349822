use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_, _req_head| {
            // Restrict to the portal origins in production
            true
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // Relaxed so custom frontend headers do not fail preflight
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
