use actix_cors::Cors;

/// Build CORS middleware.
///
/// Deliberately permissive: any origin, any method, any header, credentials
/// allowed. Suitable only for trusted/internal deployments.
pub fn cors_middleware() -> Cors {
    Cors::permissive()
}
