/// # Health Status Response
///
/// The document returned by `GET /health`: a constant top-level status, the
/// generation timestamp, and one `ok`/`error` entry per dependency.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45Z",
///   "services": { "database": "ok", "redis": "error" }
/// }
/// ```
pub mod health;
