/// Permissive cross-origin header set attached to every intake response,
/// pre-flight included. Credentials are explicitly disallowed since the
/// wildcard origin makes them meaningless.
pub const CORS_HEADERS: [(&str, &str); 5] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    (
        "Access-Control-Allow-Methods",
        "POST, GET, OPTIONS, PUT, DELETE, PATCH",
    ),
    ("Access-Control-Max-Age", "86400"),
    ("Access-Control-Allow-Credentials", "false"),
];
