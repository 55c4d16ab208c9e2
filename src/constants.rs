/// URL prefix under which the external blob store exposes uploaded images.
///
/// Project rows carry a storage-relative path ("projects/foo.png"); the
/// serializer joins it to the request base URL under this prefix.
pub const MEDIA_URL: &str = "/media/";
