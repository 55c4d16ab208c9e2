use actix_web::HttpRequest;

pub mod contact;
pub mod docs;
pub mod home;
pub mod json_error;
pub mod projects;
pub mod social_links;

/// Scheme + authority of the incoming request, without a trailing slash.
/// Used to absolutize image URLs and the OpenAPI server entry.
pub(crate) fn request_base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}
