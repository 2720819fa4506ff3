use actix_cors::Cors;

/// Builds the CORS layer from the configured allow-list. `None` allows any
/// origin; an empty list allows none.
pub fn cors(allowed_origins: Option<&[String]>) -> Cors {
    let Some(allowed_origins) = allowed_origins else {
        return Cors::permissive();
    };

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
