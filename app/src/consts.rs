/// Selector of the element the application is mounted on.
pub const MOUNT_SELECTOR: &str = "#app";

/// Bundled document shell, contains an anchor marker for [`MOUNT_SELECTOR`].
pub const INDEX_HTML: &str = include_str!("../../app-web/index.html");
