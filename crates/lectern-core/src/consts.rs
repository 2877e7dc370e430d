/// Sentinel returned by identifier extraction when no DOI-shaped token exists.
pub const DOI_NOT_FOUND: &str = "DOI not found";

/// Shown in a result field when an exchange is triggered with blank text.
pub const ENTER_CONTENT_NOTICE: &str = "Please enter some content before submitting.";

/// Replaces a result field when the request or the response stream fails.
pub const REQUEST_FAILED_NOTICE: &str = "Request failed, please check that the backend is running.";

/// Default remote endpoint for translate/analyze exchanges.
pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:5000/api/message";

/// Default limit on connecting and on each read while the body streams.
/// A long answer may keep streaming past it as long as data keeps arriving.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 120;

/// Lower bound for the zoom scale.
pub const DEFAULT_MIN_SCALE: f32 = 0.25;

/// Added to the scale by one zoom-in step.
pub const DEFAULT_ZOOM_IN_STEP: f32 = 0.7;

/// Subtracted from the scale by one zoom-out step.
pub const DEFAULT_ZOOM_OUT_STEP: f32 = 0.25;

/// Read buffer size for the streamed response body.
pub const STREAM_READ_BUFFER_BYTES: usize = 4096;

/// Read buffer size for hashing files from disk.
pub const DIGEST_READ_BUFFER_BYTES: usize = 64 * 1024;

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Directory name used under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "lectern";
